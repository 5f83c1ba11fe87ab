use std::str::FromStr;

use calm_forms::numeric::{
    Direction, LocaleFormatter, Selection, StepConstraints, StepEngine, sanitize,
    transform_selection,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

proptest! {
    #[test]
    fn sanitized_text_has_one_sign_and_one_delimiter(
        raw in "[-0-9.,a-z ]{0,16}",
        delimiter in prop::sample::select(vec!['.', ',']),
        allow_negative in any::<bool>(),
    ) {
        let cleaned = sanitize(&raw, delimiter, allow_negative);

        prop_assert!(cleaned
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch == delimiter || ch == '-'));
        prop_assert!(cleaned.chars().filter(|ch| *ch == delimiter).count() <= 1);
        prop_assert!(cleaned.chars().skip(1).all(|ch| ch != '-'));
        if !allow_negative {
            prop_assert!(!cleaned.contains('-'));
        }
    }

    #[test]
    fn sanitize_is_idempotent(
        raw in "[-0-9.,]{0,12}",
        delimiter in prop::sample::select(vec!['.', ',']),
    ) {
        let once = sanitize(&raw, delimiter, true);
        prop_assert_eq!(sanitize(&once, delimiter, true), once);
    }

    #[test]
    fn caret_keeps_its_order_and_stays_in_range(
        raw in "[-0-9.,a-z]{0,12}",
        first in 0usize..14,
        second in 0usize..14,
        allow_negative in any::<bool>(),
    ) {
        let cleaned = sanitize(&raw, ',', allow_negative);
        let (low, high) = (first.min(second), first.max(second));
        let low = transform_selection(Selection::caret(low), &raw, &cleaned, ',', allow_negative);
        let high = transform_selection(Selection::caret(high), &raw, &cleaned, ',', allow_negative);

        prop_assert!(low.start <= high.start);
        prop_assert!(high.start <= cleaned.chars().count());
    }

    #[test]
    fn display_text_converts_back_to_the_same_canonical_text(
        canonical in "-?[0-9]{1,6}(\\.[0-9]{1,4})?",
        locale in prop::sample::select(vec!["en", "de", "fr-CA", "pt-BR", "xx"]),
    ) {
        let formatter = LocaleFormatter::default();
        let display = formatter.to_display(&canonical, Some(locale));
        prop_assert_eq!(formatter.to_canonical(&display, Some(locale)), canonical);
    }

    #[test]
    fn bounded_steps_stay_in_range_and_on_the_grid(
        min in -5_000i64..5_000,
        span in 0i64..10_000,
        step in 1i64..2_000,
        offset in 0u32..=1_000,
        increment in any::<bool>(),
    ) {
        let max = min + span;
        let current = min + span * i64::from(offset) / 1_000;
        let (min, max, step, current) = (cents(min), cents(max), cents(step), cents(current));

        let engine = StepEngine::new(StepConstraints {
            min: Some(min),
            max: Some(max),
            step,
        });
        let direction = if increment { Direction::Increment } else { Direction::Decrement };
        let stepped = engine.apply(&current.normalize().to_string(), direction, '.');
        let stepped = Decimal::from_str(&stepped).expect("canonical output");

        prop_assert!(stepped >= min, "{stepped} < {min}");
        prop_assert!(stepped <= max, "{stepped} > {max}");
        prop_assert!(((stepped - min) % step).is_zero(), "{stepped} is off the grid");
    }

    #[test]
    fn unbounded_steps_move_by_exactly_one_step_from_the_grid(
        multiple in -1_000i64..1_000,
        step in 1i64..500,
        increment in any::<bool>(),
    ) {
        let step = cents(step);
        let current = step * Decimal::from(multiple);
        let engine = StepEngine::new(StepConstraints {
            min: None,
            max: None,
            step,
        });
        let direction = if increment { Direction::Increment } else { Direction::Decrement };
        let expected = if increment { current + step } else { current - step };

        let stepped = engine.apply(&current.normalize().to_string(), direction, '.');
        prop_assert_eq!(Decimal::from_str(&stepped).expect("canonical output"), expected);
    }
}
