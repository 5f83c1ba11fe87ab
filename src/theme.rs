use gpui::Hsla;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorValue {
    White,
    Black,
    /// `#rrggbb` or `#rrggbbaa`.
    Custom(String),
}

impl ColorValue {
    pub fn hex(value: impl Into<String>) -> Self {
        Self::Custom(value.into())
    }

    pub fn resolve_hsla(&self) -> Hsla {
        match self {
            Self::White => gpui::white(),
            Self::Black => gpui::black(),
            Self::Custom(raw) => gpui::Rgba::try_from(raw.as_str())
                .map(Into::into)
                .unwrap_or_else(|_| gpui::black()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberInputTokens {
    pub bg: ColorValue,
    pub fg: ColorValue,
    pub placeholder: ColorValue,
    pub border: ColorValue,
    pub border_focus: ColorValue,
    pub border_error: ColorValue,
    pub arrows_bg: ColorValue,
    pub arrows_fg: ColorValue,
    pub arrows_border: ColorValue,
    pub label: ColorValue,
    pub caret: ColorValue,
    pub message_hint: ColorValue,
    pub message_error: ColorValue,
    pub message_success: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ToggleFacadeTokens {
    pub track_off_bg: ColorValue,
    pub track_on_bg: ColorValue,
    pub track_border: ColorValue,
    pub thumb_bg: ColorValue,
    pub focus_ring: ColorValue,
    pub label: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormsTheme {
    pub number_input: NumberInputTokens,
    pub toggle_facade: ToggleFacadeTokens,
    pub disabled_opacity: u8,
}

impl Default for FormsTheme {
    fn default() -> Self {
        Self {
            number_input: NumberInputTokens {
                bg: ColorValue::White,
                fg: ColorValue::hex("#2d3b45"),
                placeholder: ColorValue::hex("#8b969e"),
                border: ColorValue::hex("#c7cdd1"),
                border_focus: ColorValue::hex("#008ee2"),
                border_error: ColorValue::hex("#ee0612"),
                arrows_bg: ColorValue::hex("#f5f5f5"),
                arrows_fg: ColorValue::hex("#2d3b45"),
                arrows_border: ColorValue::hex("#c7cdd1"),
                label: ColorValue::hex("#2d3b45"),
                caret: ColorValue::hex("#2d3b45"),
                message_hint: ColorValue::hex("#73818c"),
                message_error: ColorValue::hex("#ee0612"),
                message_success: ColorValue::hex("#00ac18"),
            },
            toggle_facade: ToggleFacadeTokens {
                track_off_bg: ColorValue::hex("#c7cdd1"),
                track_on_bg: ColorValue::hex("#00ac18"),
                track_border: ColorValue::hex("#73818c"),
                thumb_bg: ColorValue::White,
                focus_ring: ColorValue::hex("#008ee2"),
                label: ColorValue::hex("#2d3b45"),
            },
            disabled_opacity: 50,
        }
    }
}

impl FormsTheme {
    pub fn disabled_opacity(&self) -> f32 {
        f32::from(self.disabled_opacity.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_tokens_resolve() {
        let red = ColorValue::hex("#ff0000").resolve_hsla();
        assert_ne!(red, gpui::black());
        assert_eq!(ColorValue::White.resolve_hsla(), gpui::white());
    }

    #[test]
    fn malformed_hex_falls_back_to_black() {
        assert_eq!(ColorValue::hex("not-a-color").resolve_hsla(), gpui::black());
    }

    #[test]
    fn disabled_opacity_is_a_fraction() {
        let theme = FormsTheme {
            disabled_opacity: 250,
            ..FormsTheme::default()
        };
        assert_eq!(theme.disabled_opacity(), 1.0);
        assert_eq!(FormsTheme::default().disabled_opacity(), 0.5);
    }
}
