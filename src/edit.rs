use crate::numeric::{Selection, SelectionDirection};

/// Caret-aware text buffer behind the number field's text entry.
///
/// Offsets are in chars. Every mutating call produces the raw text the user
/// would see before sanitization; the caller feeds it to the controller.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EditBuffer {
    text: String,
    selection: Selection,
    anchor: usize,
}

impl EditBuffer {
    pub fn new(text: impl Into<String>, selection: Selection) -> Self {
        let text = text.into();
        let selection = selection.clamped(text.chars().count());
        let anchor = match selection.direction {
            SelectionDirection::Backward => selection.end,
            _ => selection.start,
        };
        Self {
            text,
            selection,
            anchor,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Where the blinking caret sits: the moving end of the selection.
    pub fn caret(&self) -> usize {
        match self.selection.direction {
            SelectionDirection::Backward => self.selection.start,
            _ => self.selection.end,
        }
    }

    pub fn insert_text(&mut self, insert: &str) -> bool {
        if insert.is_empty() {
            return false;
        }
        self.replace_range(self.selection.start, self.selection.end, insert);
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if !self.selection.is_caret() {
            self.replace_range(self.selection.start, self.selection.end, "");
            return true;
        }
        if self.selection.start == 0 {
            return false;
        }
        self.replace_range(self.selection.start - 1, self.selection.start, "");
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if !self.selection.is_caret() {
            self.replace_range(self.selection.start, self.selection.end, "");
            return true;
        }
        if self.selection.end >= self.len() {
            return false;
        }
        self.replace_range(self.selection.end, self.selection.end + 1, "");
        true
    }

    pub fn move_left(&mut self, extend: bool) {
        if !extend && !self.selection.is_caret() {
            self.collapse_to(self.selection.start);
            return;
        }
        self.move_caret(self.caret().saturating_sub(1), extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend && !self.selection.is_caret() {
            self.collapse_to(self.selection.end);
            return;
        }
        self.move_caret((self.caret() + 1).min(self.len()), extend);
    }

    pub fn move_home(&mut self, extend: bool) {
        self.move_caret(0, extend);
    }

    pub fn move_end(&mut self, extend: bool) {
        self.move_caret(self.len(), extend);
    }

    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.selection = Selection::range(0, self.len(), SelectionDirection::Forward);
    }

    pub fn selected_text(&self) -> String {
        self.text
            .chars()
            .skip(self.selection.start)
            .take(self.selection.end - self.selection.start)
            .collect()
    }

    fn move_caret(&mut self, caret: usize, extend: bool) {
        if !extend {
            self.collapse_to(caret);
            return;
        }
        self.selection = if caret < self.anchor {
            Selection::range(caret, self.anchor, SelectionDirection::Backward)
        } else if caret > self.anchor {
            Selection::range(self.anchor, caret, SelectionDirection::Forward)
        } else {
            Selection::caret(caret)
        };
    }

    fn collapse_to(&mut self, caret: usize) {
        self.anchor = caret;
        self.selection = Selection::caret(caret);
    }

    fn replace_range(&mut self, start: usize, end: usize, insert: &str) {
        let byte_start = byte_index_at_char(&self.text, start);
        let byte_end = byte_index_at_char(&self.text, end);
        self.text.replace_range(byte_start..byte_end, insert);
        self.collapse_to((start + insert.chars().count()).min(self.len()));
    }
}

fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_selection() {
        let mut buffer = EditBuffer::new(
            "12345",
            Selection::range(1, 3, SelectionDirection::Forward),
        );
        assert!(buffer.insert_text("9"));
        assert_eq!(buffer.text(), "1945");
        assert_eq!(buffer.selection(), Selection::caret(2));
        assert!(!buffer.insert_text(""));
    }

    #[test]
    fn deletes_around_caret() {
        let mut buffer = EditBuffer::new("1,5", Selection::caret(2));
        assert!(buffer.delete_backward());
        assert_eq!(buffer.text(), "15");
        assert_eq!(buffer.caret(), 1);
        assert!(buffer.delete_forward());
        assert_eq!(buffer.text(), "1");
        assert!(!buffer.delete_forward());
        buffer.move_home(false);
        assert!(!buffer.delete_backward());
    }

    #[test]
    fn shift_moves_extend_from_anchor() {
        let mut buffer = EditBuffer::new("1234", Selection::caret(2));
        buffer.move_left(true);
        buffer.move_left(true);
        assert_eq!(
            buffer.selection(),
            Selection::range(0, 2, SelectionDirection::Backward)
        );
        assert_eq!(buffer.selected_text(), "12");
        buffer.move_right(false);
        assert_eq!(buffer.selection(), Selection::caret(2));
        buffer.move_end(true);
        assert_eq!(buffer.selected_text(), "34");
    }

    #[test]
    fn select_all_then_type_replaces_everything() {
        let mut buffer = EditBuffer::new("-0,75", Selection::caret(0));
        buffer.select_all();
        buffer.insert_text("3");
        assert_eq!(buffer.text(), "3");
        assert_eq!(buffer.caret(), 1);
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let buffer = EditBuffer::new("12", Selection::caret(10));
        assert_eq!(buffer.caret(), 2);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.len(), 2);
    }
}
