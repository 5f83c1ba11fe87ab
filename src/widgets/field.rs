use gpui::SharedString;

use crate::messages::{FormMessage, has_error};

/// Everything the renderer needs to draw a labeled number entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    pub id: SharedString,
    pub label: SharedString,
    pub value: SharedString,
    pub placeholder: Option<SharedString>,
    pub disabled: bool,
    pub required: bool,
    pub invalid: bool,
    pub show_arrows: bool,
}

impl FieldDescriptor {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        value: impl Into<SharedString>,
        messages: &[FormMessage],
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            placeholder: None,
            disabled: false,
            required: false,
            invalid: has_error(messages),
            show_arrows: true,
        }
    }

    /// Disabled fields take no focus, typing or clicks.
    pub fn interactive(&self) -> bool {
        !self.disabled
    }

    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty() && self.placeholder.is_some()
    }

    /// Arrows are only live on an enabled field that shows them.
    pub fn arrows_interactive(&self) -> bool {
        self.show_arrows && self.interactive()
    }
}
