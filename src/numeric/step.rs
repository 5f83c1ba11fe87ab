use rust_decimal::Decimal;

use crate::error::NumericError;

use super::locale::replace_delimiter;
use super::{CANONICAL_DELIMITER, format_canonical, parse_canonical, parse_or_zero};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// Maps arrow keys, either gpui key names or DOM-style names.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "up" | "ArrowUp" => Some(Self::Increment),
            "down" | "ArrowDown" => Some(Self::Decrement),
            _ => None,
        }
    }
}

/// Parsed `min`/`max`/`step` configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepConstraints {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub step: Decimal,
}

impl Default for StepConstraints {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: Decimal::ONE,
        }
    }
}

impl StepConstraints {
    /// Blank bounds are unbounded and a blank step is one. Unparseable values
    /// get the same treatment.
    pub fn parse(min: &str, max: &str, step: &str) -> Self {
        Self {
            min: lenient_bound("min", min),
            max: lenient_bound("max", max),
            step: lenient_step(step),
        }
    }

    /// Like [`StepConstraints::parse`] but reports malformed values.
    pub fn try_new(min: &str, max: &str, step: &str) -> Result<Self, NumericError> {
        let min = strict_bound("min", min)?;
        let max = strict_bound("max", max)?;
        let step = if step.trim().is_empty() {
            Decimal::ONE
        } else {
            let value = parse_canonical(step).ok_or_else(|| NumericError::InvalidNumber {
                field: "step",
                text: step.to_string(),
            })?;
            if value <= Decimal::ZERO {
                return Err(NumericError::InvalidStep(step.to_string()));
            }
            value
        };

        if let (Some(low), Some(high)) = (min, max)
            && low > high
        {
            return Err(NumericError::InvertedBounds {
                min: format_canonical(low),
                max: format_canonical(high),
            });
        }

        Ok(Self { min, max, step })
    }
}

fn lenient_bound(field: &'static str, text: &str) -> Option<Decimal> {
    if text.trim().is_empty() {
        return None;
    }
    let parsed = parse_canonical(text);
    if parsed.is_none() {
        tracing::warn!(field, text, "ignoring unparseable bound");
    }
    parsed
}

fn lenient_step(text: &str) -> Decimal {
    if text.trim().is_empty() {
        return Decimal::ONE;
    }
    match parse_canonical(text) {
        Some(step) if step > Decimal::ZERO => step,
        _ => {
            tracing::warn!(text, "step must be a positive number; using 1");
            Decimal::ONE
        }
    }
}

fn strict_bound(field: &'static str, text: &str) -> Result<Option<Decimal>, NumericError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_canonical(text)
        .map(Some)
        .ok_or_else(|| NumericError::InvalidNumber {
            field,
            text: text.to_string(),
        })
}

/// Increment/decrement arithmetic for a number field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StepEngine {
    constraints: StepConstraints,
}

impl StepEngine {
    pub fn new(constraints: StepConstraints) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> StepConstraints {
        self.constraints
    }

    /// Computes the canonical text that follows `current_display` when the
    /// user steps in `direction`.
    ///
    /// A value below `min` or above `max` is pulled back to the bound instead
    /// of being stepped, even when it is also off the grid. A value on the
    /// grid moves by one step; one between grid points snaps to the next grid
    /// point in the direction of travel.
    pub fn apply(&self, current_display: &str, direction: Direction, delimiter: char) -> String {
        let StepConstraints { min, max, step } = self.constraints;
        let raw = replace_delimiter(current_display, delimiter, CANONICAL_DELIMITER);
        let has_current = !raw.is_empty();
        let current = parse_or_zero(&raw);
        let base = min.unwrap_or(Decimal::ZERO);

        let Some(value) = current.checked_sub(base) else {
            tracing::debug!(current = %current, "step overflowed; keeping value");
            return raw;
        };

        if let Some(min) = min
            && value.is_sign_negative()
            && !value.is_zero()
        {
            tracing::debug!(current = %current, min = %min, "value below min; clamping");
            return match direction {
                Direction::Decrement if has_current => raw,
                _ => format_canonical(min),
            };
        }

        if let Some(max) = max
            && current > max
        {
            tracing::debug!(current = %current, max = %max, "value above max; clamping");
            return match direction {
                Direction::Increment if has_current => raw,
                _ => format_canonical(max),
            };
        }

        let Some(stepped) = step_relative(value, step, direction) else {
            tracing::debug!(value = %value, step = %step, "step overflowed; keeping value");
            return raw;
        };

        if min.is_some() && stepped.is_sign_negative() && !stepped.is_zero() {
            return format_canonical(base);
        }

        let Some(mut result) = stepped.checked_add(base) else {
            return raw;
        };

        if let Some(max) = max
            && let Some(max_step) = largest_grid_point(base, max, step)
            && result > max_step
        {
            result = max_step;
        }

        format_canonical(result)
    }
}

fn step_relative(value: Decimal, step: Decimal, direction: Direction) -> Option<Decimal> {
    let remainder = value.checked_rem(step)?;
    if remainder.is_zero() {
        return match direction {
            Direction::Increment => value.checked_add(step),
            Direction::Decrement => value.checked_sub(step),
        };
    }

    let steps = value.checked_div(step)?;
    let snapped = match direction {
        Direction::Increment => steps.ceil(),
        Direction::Decrement => steps.floor(),
    };
    snapped.checked_mul(step)
}

fn largest_grid_point(base: Decimal, max: Decimal, step: Decimal) -> Option<Decimal> {
    max.checked_sub(base)?
        .checked_div(step)?
        .floor()
        .checked_mul(step)?
        .checked_add(base)
}

/// String-level entry point: blank `min`/`max` are unbounded and a blank
/// `step` is one.
pub fn apply_step(
    current_display: &str,
    direction: Direction,
    min: &str,
    max: &str,
    step: &str,
    delimiter: char,
) -> String {
    StepEngine::new(StepConstraints::parse(min, max, step)).apply(
        current_display,
        direction,
        delimiter,
    )
}
