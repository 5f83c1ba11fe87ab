use gpui::IntoElement;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn widgets_facade_exports_render_components() {
    assert_render_once::<crate::widgets::NumberInput>();
    assert_render_once::<crate::widgets::ToggleFacade>();
}

#[test]
fn prelude_smoke_builds_widgets() {
    use crate::prelude::*;

    let _ = into_any(
        NumberInput::new("Quantity")
            .min("0")
            .max("10")
            .step("0.5")
            .locale("de")
            .size(InputSize::Large)
            .layout(FieldLayout::Inline)
            .message(FormMessage::hint("Whole boxes only"))
            .on_change(|change: &ValueChange, _, _| {
                let _ = change.canonical.len();
            }),
    );
    let _ = into_any(
        ToggleFacade::new("Dark mode")
            .checked(true)
            .size(Size::Small)
            .label_placement(LabelPlacement::Start),
    );
}

#[test]
fn numeric_facade_exports_core_operations() {
    use crate::numeric::{Direction, apply_step, sanitize};

    assert_eq!(sanitize("1a,2", ',', true), "1,2");
    assert_eq!(apply_step("9", Direction::Decrement, "2", "10", "3", '.'), "8");
    assert_eq!(
        crate::numeric::LocaleFormatter::default().to_display("2.5", Some("de")),
        "2,5"
    );
    assert!(crate::numeric::StepConstraints::try_new("5", "1", "1").is_err());
}

#[test]
fn controller_is_usable_without_a_window() {
    let config = crate::controller::NumberInputConfig::default();
    let state = config.initial_state(None, Some("4"));
    let mut controller = crate::NumberInputController::new(config, state);
    assert_eq!(
        controller.key_down("up"),
        crate::KeyOutcome::Stepped(crate::ValueChange {
            display: "5".to_string(),
            canonical: "5".to_string(),
        })
    );
}
