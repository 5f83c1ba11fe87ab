use rust_decimal::Decimal;

const SIGN: char = '-';

/// Strips raw input down to digits, one leading sign, and one `delimiter`.
///
/// The result may be empty, which is a valid "no value yet" state.
pub fn sanitize(raw: &str, delimiter: char, allow_negative: bool) -> String {
    let kept = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == SIGN || *ch == delimiter)
        .collect::<String>();
    let negative = allow_negative && kept.starts_with(SIGN);

    let mut unsigned = kept.chars().filter(|ch| *ch != SIGN).collect::<String>();
    if negative {
        unsigned.insert(0, SIGN);
    }

    let Some((head, tail)) = unsigned.split_once(delimiter) else {
        return unsigned;
    };

    let mut cleaned = String::with_capacity(unsigned.len());
    cleaned.push_str(head);
    cleaned.push(delimiter);
    cleaned.extend(tail.chars().filter(|ch| *ch != delimiter));
    cleaned
}

/// Only a non-negative lower bound forbids typing a sign.
pub fn allows_negative(min: Option<Decimal>) -> bool {
    min.is_none_or(|min| min.is_sign_negative() && !min.is_zero())
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SelectionDirection {
    Forward,
    Backward,
    #[default]
    None,
}

/// A caret or selection in character offsets. `start == end` is a bare caret.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
    pub direction: SelectionDirection,
}

impl Selection {
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
            direction: SelectionDirection::None,
        }
    }

    pub fn range(start: usize, end: usize, direction: SelectionDirection) -> Self {
        if start <= end {
            Self {
                start,
                end,
                direction,
            }
        } else {
            Self {
                start: end,
                end: start,
                direction,
            }
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn clamped(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
            direction: self.direction,
        }
    }
}

/// Moves a selection made in `dirty` text to the equivalent spot in `cleaned`.
///
/// `cleaned` must be `sanitize(dirty, delimiter, allow_negative)`. Cleaning is
/// prefix-stable, so an offset maps to the length of the cleaned text before
/// it. A caret right after a kept delimiter or sign stays after it.
pub fn transform_selection(
    selection: Selection,
    dirty: &str,
    cleaned: &str,
    delimiter: char,
    allow_negative: bool,
) -> Selection {
    if dirty == cleaned {
        return selection.clamped(cleaned.chars().count());
    }

    let map = |offset: usize| {
        let prefix = dirty.chars().take(offset).collect::<String>();
        sanitize(&prefix, delimiter, allow_negative)
            .chars()
            .count()
            .min(cleaned.chars().count())
    };
    Selection {
        start: map(selection.start),
        end: map(selection.end),
        direction: selection.direction,
    }
}
