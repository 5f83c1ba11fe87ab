#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputSize {
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldLayout {
    #[default]
    Stacked,
    Inline,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LabelPlacement {
    Top,
    Start,
    #[default]
    End,
}

impl InputSize {
    pub fn font_size_px(self) -> f32 {
        match self {
            Self::Medium => 14.0,
            Self::Large => 18.0,
        }
    }

    pub fn height_px(self) -> f32 {
        match self {
            Self::Medium => 36.0,
            Self::Large => 48.0,
        }
    }
}
