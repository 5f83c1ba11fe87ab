//! Numeric editing core for [`NumberInput`](crate::widgets::NumberInput).
//!
//! Everything in here is a pure function of its inputs and has no knowledge of
//! gpui. Text moves between three shapes:
//!
//! - *raw* text, whatever the user typed or pasted,
//! - *display* text, cleaned and written with the locale's decimal delimiter,
//! - *canonical* text, the same number written with `.`.

pub mod locale;
pub mod sanitize;
pub mod step;

use std::str::FromStr;

use rust_decimal::Decimal;

pub use locale::{DelimiterLookup, DelimiterTable, LocaleFormatter, resolve_locale};
pub use sanitize::{Selection, SelectionDirection, allows_negative, sanitize, transform_selection};
pub use step::{Direction, StepConstraints, StepEngine, apply_step};

pub const CANONICAL_DELIMITER: char = '.';

/// Parses canonical text into a decimal.
///
/// Accepts the partial forms a user produces while typing (`"1."`, `".5"`,
/// `"-"`). Returns `None` when there are no digits at all or the value does not
/// fit a `Decimal`.
pub fn parse_canonical(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (int_part, frac_part) = match unsigned.split_once(CANONICAL_DELIMITER) {
        Some((head, tail)) => (head, tail),
        None => (unsigned, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().chain(frac_part.chars()).all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };

    let value = Decimal::from_str(&normalized).ok()?;
    Some(if negative { -value } else { value })
}

/// Lenient counterpart of [`parse_canonical`]: anything unparseable is zero.
pub fn parse_or_zero(text: &str) -> Decimal {
    parse_canonical(text).unwrap_or(Decimal::ZERO)
}

/// Writes a decimal as canonical text without trailing zeros or a negative zero.
pub fn format_canonical(value: Decimal) -> String {
    let text = value.normalize().to_string();
    if text == "-0" { "0".to_string() } else { text }
}
