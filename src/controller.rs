use crate::numeric::{
    Direction, LocaleFormatter, Selection, StepEngine, allows_negative, sanitize,
    transform_selection,
};

/// Retained state of one number field between events.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldState {
    pub display: String,
    pub selection: Selection,
    pub focused: bool,
    /// Locale `display` is currently written in.
    pub locale: Option<String>,
}

/// New value of a number field after an edit or a step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueChange {
    pub display: String,
    pub canonical: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyOutcome {
    Stepped(ValueChange),
    Passthrough,
}

#[derive(Clone, Debug, Default)]
pub struct NumberInputConfig {
    pub engine: StepEngine,
    /// Effective locale, already resolved.
    pub locale: Option<String>,
    pub formatter: LocaleFormatter,
}

impl NumberInputConfig {
    pub fn delimiter(&self) -> char {
        self.formatter.delimiter_for(self.locale.as_deref())
    }

    /// What the field shows before any interaction. Controlled values are
    /// shown as given; a default value is canonical and gets localized.
    pub fn initial_state(&self, value: Option<&str>, default_value: Option<&str>) -> FieldState {
        let display = match (value, default_value) {
            (Some(value), _) => value.to_string(),
            (None, Some(default_value)) if !default_value.is_empty() => self
                .formatter
                .to_display(default_value, self.locale.as_deref()),
            _ => String::new(),
        };
        let end = display.chars().count();
        FieldState {
            display,
            selection: Selection::caret(end),
            focused: false,
            locale: self.locale.clone(),
        }
    }
}

/// Event handling for a number field, independent of the UI toolkit.
#[derive(Clone, Debug)]
pub struct NumberInputController {
    config: NumberInputConfig,
    state: FieldState,
}

impl NumberInputController {
    pub fn new(config: NumberInputConfig, state: FieldState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &NumberInputConfig {
        &self.config
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn into_state(self) -> FieldState {
        self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn canonical(&self) -> String {
        self.config
            .formatter
            .to_canonical(&self.state.display, self.config.locale.as_deref())
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Replaces the display with a controlled value, keeping the caret in range.
    pub fn set_display(&mut self, display: impl Into<String>) {
        self.state.display = display.into();
        let len = self.state.display.chars().count();
        self.state.selection = self.state.selection.clamped(len);
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.state.selection = selection.clamped(self.state.display.chars().count());
    }

    /// Handles a raw text change from the text entry.
    pub fn text_changed(&mut self, raw: &str, selection: Selection) -> ValueChange {
        let allow_negative = allows_negative(self.config.engine.constraints().min);
        let delimiter = self.config.delimiter();
        let cleaned = sanitize(raw, delimiter, allow_negative);
        self.state.selection =
            transform_selection(selection, raw, &cleaned, delimiter, allow_negative);
        self.state.display = cleaned;
        self.change()
    }

    /// Handles an arrow key or arrow button.
    pub fn step(&mut self, direction: Direction) -> ValueChange {
        let canonical =
            self.config
                .engine
                .apply(&self.state.display, direction, self.config.delimiter());
        let next_display = self
            .config
            .formatter
            .to_display(&canonical, self.config.locale.as_deref());
        tracing::trace!(?direction, from = %self.state.display, to = %next_display, "stepped number field");
        self.set_display(next_display);
        self.state.selection = Selection::caret(self.state.display.chars().count());
        self.change()
    }

    pub fn key_down(&mut self, key: &str) -> KeyOutcome {
        match Direction::from_key(key) {
            Some(direction) => KeyOutcome::Stepped(self.step(direction)),
            None => KeyOutcome::Passthrough,
        }
    }

    /// Returns whether the focus flag changed.
    pub fn focus(&mut self) -> bool {
        !std::mem::replace(&mut self.state.focused, true)
    }

    /// Returns whether the focus flag changed.
    pub fn blur(&mut self) -> bool {
        std::mem::replace(&mut self.state.focused, false)
    }

    /// Switches the field to a new locale, rewriting the live display string.
    pub fn set_locale(&mut self, locale: Option<String>) -> bool {
        if self.config.locale == locale {
            return false;
        }
        self.config.locale = locale;
        self.sync_locale()
    }

    /// Brings a display written for an older locale up to the configured one.
    pub fn sync_locale(&mut self) -> bool {
        if self.state.locale == self.config.locale {
            return false;
        }
        let relocalized = self.config.formatter.relocalize(
            &self.state.display,
            self.state.locale.as_deref(),
            self.config.locale.as_deref(),
        );
        tracing::debug!(
            from = ?self.state.locale,
            to = ?self.config.locale,
            "relocalized number field"
        );
        self.state.display = relocalized;
        self.state.locale = self.config.locale.clone();
        true
    }

    fn change(&self) -> ValueChange {
        ValueChange {
            display: self.state.display.clone(),
            canonical: self.canonical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditBuffer;
    use crate::numeric::{SelectionDirection, StepConstraints};

    fn controller(min: &str, max: &str, step: &str, locale: Option<&str>) -> NumberInputController {
        let config = NumberInputConfig {
            engine: StepEngine::new(StepConstraints::parse(min, max, step)),
            locale: locale.map(str::to_string),
            formatter: LocaleFormatter::default(),
        };
        let state = config.initial_state(None, None);
        NumberInputController::new(config, state)
    }

    #[test]
    fn typing_is_sanitized_and_caret_follows() {
        let mut field = controller("", "", "1", None);
        let change = field.text_changed("1a2", Selection::caret(2));
        assert_eq!(change.display, "12");
        assert_eq!(field.state().selection, Selection::caret(1));
    }

    #[test]
    fn junk_after_delimiter_keeps_caret_behind_it() {
        let mut field = controller("", "", "1", Some("de"));
        field.text_changed("1,x5", Selection::caret(3));
        assert_eq!(field.display(), "1,5");
        assert_eq!(field.state().selection, Selection::caret(2));

        let mut buffer = EditBuffer::new(field.display(), field.state().selection);
        buffer.insert_text("2");
        let change = field.text_changed(buffer.text(), buffer.selection());
        assert_eq!(change.display, "1,25");
        assert_eq!(change.canonical, "1.25");
    }

    #[test]
    fn junk_after_sign_keeps_caret_behind_it() {
        let mut field = controller("", "", "1", None);
        field.text_changed("-a5", Selection::caret(2));
        assert_eq!(field.display(), "-5");
        assert_eq!(field.state().selection, Selection::caret(1));

        let mut buffer = EditBuffer::new(field.display(), field.state().selection);
        buffer.insert_text("4");
        assert_eq!(field.text_changed(buffer.text(), buffer.selection()).display, "-45");
    }

    #[test]
    fn rejected_keystroke_still_reports_a_change() {
        let mut field = controller("", "", "1", None);
        field.text_changed("12", Selection::caret(2));
        let change = field.text_changed("12a", Selection::caret(3));
        assert_eq!(change.display, "12");
        assert_eq!(change.canonical, "12");
        assert_eq!(field.state().selection, Selection::caret(2));
    }

    #[test]
    fn non_negative_min_rejects_sign() {
        let mut field = controller("0", "", "1", None);
        assert_eq!(field.text_changed("-5", Selection::caret(2)).display, "5");

        let mut field = controller("-10", "", "1", None);
        assert_eq!(field.text_changed("-5", Selection::caret(2)).display, "-5");
    }

    #[test]
    fn typing_uses_locale_delimiter() {
        let mut field = controller("", "", "1", Some("de"));
        let change = field.text_changed("1.2,5,", Selection::caret(6));
        assert_eq!(change.display, "12,5");
        assert_eq!(change.canonical, "12.5");
    }

    #[test]
    fn arrows_step_and_localize() {
        let mut field = controller("", "", "0.5", Some("fr"));
        field.text_changed("1,2", Selection::caret(3));
        let outcome = field.key_down("up");
        assert_eq!(
            outcome,
            KeyOutcome::Stepped(ValueChange {
                display: "1,5".to_string(),
                canonical: "1.5".to_string(),
            })
        );
        assert_eq!(field.state().selection, Selection::caret(3));
        assert_eq!(field.step(Direction::Decrement).display, "1");
    }

    #[test]
    fn other_keys_pass_through() {
        let mut field = controller("", "", "1", None);
        field.text_changed("7", Selection::caret(1));
        assert_eq!(field.key_down("enter"), KeyOutcome::Passthrough);
        assert_eq!(field.display(), "7");
    }

    #[test]
    fn locale_switch_rewrites_live_display() {
        let mut field = controller("", "", "1", Some("de"));
        field.text_changed("12,5", Selection::caret(4));
        assert!(field.set_locale(Some("en".to_string())));
        assert_eq!(field.display(), "12.5");
        assert!(!field.set_locale(Some("en".to_string())));
    }

    #[test]
    fn sync_locale_catches_up_stale_state() {
        let config = NumberInputConfig {
            locale: Some("it".to_string()),
            ..NumberInputConfig::default()
        };
        let state = FieldState {
            display: "3.25".to_string(),
            locale: Some("en".to_string()),
            ..FieldState::default()
        };
        let mut field = NumberInputController::new(config, state);
        assert!(field.sync_locale());
        assert_eq!(field.display(), "3,25");
        assert!(!field.sync_locale());
    }

    #[test]
    fn default_value_is_localized_but_value_is_not() {
        let config = NumberInputConfig {
            locale: Some("de".to_string()),
            ..NumberInputConfig::default()
        };
        assert_eq!(config.initial_state(None, Some("2.5")).display, "2,5");
        assert_eq!(config.initial_state(Some("2.5"), Some("1")).display, "2.5");
        assert_eq!(config.initial_state(None, None).display, "");
        assert_eq!(config.initial_state(None, Some("2.5")).selection, Selection::caret(3));
    }

    #[test]
    fn focus_flag_reports_transitions() {
        let mut field = controller("", "", "1", None);
        assert!(field.focus());
        assert!(!field.focus());
        assert!(field.is_focused());
        assert!(field.blur());
        assert!(!field.blur());
    }

    #[test]
    fn controlled_display_clamps_selection() {
        let mut field = controller("", "", "1", None);
        field.text_changed(
            "12345",
            Selection::range(1, 5, SelectionDirection::Forward),
        );
        field.set_display("9");
        assert_eq!(field.state().selection.end, 1);
        assert_eq!(field.state().selection.start, 1);
    }
}
