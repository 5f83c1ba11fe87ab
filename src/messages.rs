use gpui::SharedString;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKind {
    Error,
    Hint,
    Success,
    ScreenReaderOnly,
}

/// Feedback shown under a form field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormMessage {
    pub text: SharedString,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn new(text: impl Into<SharedString>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn error(text: impl Into<SharedString>) -> Self {
        Self::new(text, MessageKind::Error)
    }

    pub fn hint(text: impl Into<SharedString>) -> Self {
        Self::new(text, MessageKind::Hint)
    }

    pub fn success(text: impl Into<SharedString>) -> Self {
        Self::new(text, MessageKind::Success)
    }

    pub fn screen_reader_only(text: impl Into<SharedString>) -> Self {
        Self::new(text, MessageKind::ScreenReaderOnly)
    }

    pub fn is_visible(&self) -> bool {
        self.kind != MessageKind::ScreenReaderOnly
    }
}

/// A field is invalid as soon as one message is an error.
pub fn has_error(messages: &[FormMessage]) -> bool {
    messages
        .iter()
        .any(|message| message.kind == MessageKind::Error)
}
