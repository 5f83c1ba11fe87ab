use gpui::{IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px};

use crate::provider::FormsProvider;
use crate::style::{LabelPlacement, Size};

/// Track and thumb measurements of a toggle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacadeGeometry {
    pub track_width: f32,
    pub track_height: f32,
    pub thumb_size: f32,
    pub thumb_left: f32,
    pub thumb_top: f32,
}

impl FacadeGeometry {
    pub fn new(size: Size, checked: bool) -> Self {
        let (track_width, track_height) = match size {
            Size::Small => (32.0, 18.0),
            Size::Medium => (40.0, 22.0),
            Size::Large => (52.0, 28.0),
        };
        let thumb_size = (track_height - 4.0_f32).max(8.0);
        let inset = ((track_height - thumb_size) / 2.0).max(1.0);
        let thumb_left = if checked {
            track_width - thumb_size - inset
        } else {
            inset
        };
        Self {
            track_width,
            track_height,
            thumb_size,
            thumb_left,
            thumb_top: inset,
        }
    }
}

/// Switch-looking visual for a checkbox. It draws state; it does not own it.
#[derive(IntoElement)]
pub struct ToggleFacade {
    label: SharedString,
    checked: bool,
    disabled: bool,
    read_only: bool,
    focused: bool,
    size: Size,
    label_placement: LabelPlacement,
}

impl ToggleFacade {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            checked: false,
            disabled: false,
            read_only: false,
            focused: false,
            size: Size::Medium,
            label_placement: LabelPlacement::End,
        }
    }

    pub fn checked(mut self, value: bool) -> Self {
        self.checked = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn read_only(mut self, value: bool) -> Self {
        self.read_only = value;
        self
    }

    pub fn focused(mut self, value: bool) -> Self {
        self.focused = value;
        self
    }

    pub fn size(mut self, value: Size) -> Self {
        self.size = value;
        self
    }

    pub fn label_placement(mut self, value: LabelPlacement) -> Self {
        self.label_placement = value;
        self
    }

    /// Read-only toggles look enabled but never show focus.
    fn shows_focus_ring(&self) -> bool {
        self.focused && !self.disabled && !self.read_only
    }
}

impl RenderOnce for ToggleFacade {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = FormsProvider::theme(cx);
        let tokens = &theme.toggle_facade;
        let geometry = FacadeGeometry::new(self.size, self.checked);

        let track_bg = if self.checked {
            tokens.track_on_bg.resolve_hsla()
        } else {
            tokens.track_off_bg.resolve_hsla()
        };

        let thumb = div()
            .absolute()
            .left(px(geometry.thumb_left))
            .top(px(geometry.thumb_top))
            .w(px(geometry.thumb_size))
            .h(px(geometry.thumb_size))
            .rounded_full()
            .bg(tokens.thumb_bg.resolve_hsla());

        let track = div()
            .relative()
            .flex_none()
            .w(px(geometry.track_width))
            .h(px(geometry.track_height))
            .rounded_full()
            .border_1()
            .border_color(tokens.track_border.resolve_hsla())
            .bg(track_bg)
            .child(thumb);

        let mut ring = div().p(px(2.0)).rounded_full().border_2();
        ring = if self.shows_focus_ring() {
            ring.border_color(tokens.focus_ring.resolve_hsla())
        } else {
            ring.border_color(gpui::transparent_black())
        };
        let facade = ring.child(track);

        let label = div()
            .text_color(tokens.label.resolve_hsla())
            .child(self.label);

        let mut row = div().flex().gap_2();
        row = match self.label_placement {
            LabelPlacement::Top => row.flex_col().items_start().child(label).child(facade),
            LabelPlacement::Start => row.flex_row().items_center().child(label).child(facade),
            LabelPlacement::End => row.flex_row().items_center().child(facade).child(label),
        };

        if self.disabled {
            row = row.opacity(theme.disabled_opacity());
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_moves_to_the_end_when_checked() {
        let off = FacadeGeometry::new(Size::Medium, false);
        let on = FacadeGeometry::new(Size::Medium, true);
        assert_eq!(off.thumb_left, 2.0);
        assert_eq!(on.thumb_left, 40.0 - 18.0 - 2.0);
        assert_eq!(off.thumb_top, on.thumb_top);
    }

    #[test]
    fn thumb_fits_inside_track_for_every_size() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            for checked in [false, true] {
                let geometry = FacadeGeometry::new(size, checked);
                assert!(geometry.thumb_left >= 0.0);
                assert!(geometry.thumb_left + geometry.thumb_size <= geometry.track_width);
                assert!(geometry.thumb_top + geometry.thumb_size <= geometry.track_height);
            }
        }
    }

    #[test]
    fn focus_ring_needs_an_editable_toggle() {
        assert!(ToggleFacade::new("Wi-Fi").focused(true).shows_focus_ring());
        assert!(
            !ToggleFacade::new("Wi-Fi")
                .focused(true)
                .read_only(true)
                .shows_focus_ring()
        );
        assert!(
            !ToggleFacade::new("Wi-Fi")
                .focused(true)
                .disabled(true)
                .shows_focus_ring()
        );
    }

    #[test]
    fn defaults_match_a_medium_toggle_labeled_at_the_end() {
        let facade = ToggleFacade::new("Notifications");
        assert!(!facade.checked);
        assert_eq!(facade.size, Size::Medium);
        assert_eq!(facade.label_placement, LabelPlacement::End);
    }
}
