use std::{
    collections::HashMap,
    rc::Rc,
    sync::{LazyLock, Mutex},
};

use gpui::{
    AnyElement, ClickEvent, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::control;
use crate::controller::{
    FieldState, KeyOutcome, NumberInputConfig, NumberInputController, ValueChange,
};
use crate::edit::EditBuffer;
use crate::id::WidgetId;
use crate::messages::{FormMessage, MessageKind};
use crate::numeric::locale::system_locale;
use crate::numeric::{Direction, StepConstraints, StepEngine, resolve_locale};
use crate::provider::FormsProvider;
use crate::style::{FieldLayout, InputSize};
use crate::theme::{FormsTheme, NumberInputTokens};

use super::field::FieldDescriptor;

type ChangeHandler = Rc<dyn Fn(&ValueChange, &mut Window, &mut gpui::App)>;
type KeyHandler = Rc<dyn Fn(&KeyDownEvent, &mut Window, &mut gpui::App)>;
type FocusHandler = Rc<dyn Fn(&mut Window, &mut gpui::App)>;

static FOCUS_HANDLES: LazyLock<Mutex<HashMap<String, FocusHandle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

#[derive(IntoElement)]
pub struct NumberInput {
    id: WidgetId,
    label: SharedString,
    show_arrows: bool,
    step: SharedString,
    min: SharedString,
    max: SharedString,
    messages: Vec<FormMessage>,
    locale: Option<String>,
    size: InputSize,
    layout: FieldLayout,
    width: Option<f32>,
    inline: bool,
    placeholder: Option<SharedString>,
    disabled: bool,
    required: bool,
    value: Option<SharedString>,
    default_value: Option<SharedString>,
    on_change: Option<ChangeHandler>,
    on_key_down: Option<KeyHandler>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
}

impl NumberInput {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: WidgetId::auto("NumberInput"),
            label: label.into(),
            show_arrows: true,
            step: "1".into(),
            min: SharedString::default(),
            max: SharedString::default(),
            messages: Vec::new(),
            locale: None,
            size: InputSize::Medium,
            layout: FieldLayout::Stacked,
            width: None,
            inline: false,
            placeholder: None,
            disabled: false,
            required: false,
            value: None,
            default_value: None,
            on_change: None,
            on_key_down: None,
            on_focus: None,
            on_blur: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<WidgetId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn show_arrows(mut self, value: bool) -> Self {
        self.show_arrows = value;
        self
    }

    pub fn step(mut self, value: impl Into<SharedString>) -> Self {
        self.step = value.into();
        self
    }

    pub fn min(mut self, value: impl Into<SharedString>) -> Self {
        self.min = value.into();
        self
    }

    pub fn max(mut self, value: impl Into<SharedString>) -> Self {
        self.max = value.into();
        self
    }

    pub fn messages(mut self, messages: impl IntoIterator<Item = FormMessage>) -> Self {
        self.messages = messages.into_iter().collect();
        self
    }

    pub fn message(mut self, message: FormMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn locale(mut self, value: impl Into<String>) -> Self {
        self.locale = Some(value.into());
        self
    }

    pub fn size(mut self, value: InputSize) -> Self {
        self.size = value;
        self
    }

    pub fn layout(mut self, value: FieldLayout) -> Self {
        self.layout = value;
        self
    }

    pub fn width(mut self, value: f32) -> Self {
        self.width = Some(value.max(0.0));
        self
    }

    pub fn inline(mut self, value: bool) -> Self {
        self.inline = value;
        self
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    /// Controlled value, in display form. Pair it with [`NumberInput::on_change`].
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Initial value in canonical form; it is localized on first render.
    pub fn default_value(mut self, value: impl Into<SharedString>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Called after every edit and step, even when cleaning the typed text
    /// leaves the value unchanged.
    pub fn on_change(
        mut self,
        handler: impl Fn(&ValueChange, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_key_down(
        mut self,
        handler: impl Fn(&KeyDownEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_key_down = Some(Rc::new(handler));
        self
    }

    pub fn on_focus(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_focus = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    fn resolved_focus_handle(&self, cx: &gpui::App) -> FocusHandle {
        if let Ok(mut handles) = FOCUS_HANDLES.lock() {
            return handles
                .entry(self.id.to_string())
                .or_insert_with(|| cx.focus_handle())
                .clone();
        }
        cx.focus_handle()
    }

    fn config(&self, cx: &gpui::App) -> NumberInputConfig {
        let contextual = FormsProvider::locale(cx);
        let system = system_locale();
        NumberInputConfig {
            engine: StepEngine::new(StepConstraints::parse(&self.min, &self.max, &self.step)),
            locale: resolve_locale(
                self.locale.as_deref(),
                contextual.as_deref(),
                system.as_deref(),
            ),
            formatter: FormsProvider::formatter(cx),
        }
    }

    fn descriptor(&self, value: &str) -> FieldDescriptor {
        let mut descriptor =
            FieldDescriptor::new(self.id.shared(), self.label.clone(), value.to_string(), &self.messages);
        descriptor.placeholder = self.placeholder.clone();
        descriptor.disabled = self.disabled;
        descriptor.required = self.required;
        descriptor.show_arrows = self.show_arrows;
        descriptor
    }

    fn render_label(descriptor: &FieldDescriptor, tokens: &NumberInputTokens) -> AnyElement {
        let mut label = div()
            .flex()
            .flex_row()
            .gap_1()
            .text_sm()
            .text_color(tokens.label.resolve_hsla())
            .child(descriptor.label.clone());
        if descriptor.required {
            label = label.child(div().text_color(tokens.message_error.resolve_hsla()).child("*"));
        }
        label.into_any_element()
    }

    fn render_text(
        descriptor: &FieldDescriptor,
        state: &FieldState,
        focused: bool,
        size: InputSize,
        tokens: &NumberInputTokens,
    ) -> AnyElement {
        let mut text = div()
            .flex()
            .flex_row()
            .flex_1()
            .items_center()
            .overflow_hidden()
            .text_size(px(size.font_size_px()));

        if descriptor.shows_placeholder() && !focused {
            if let Some(placeholder) = descriptor.placeholder.clone() {
                text = text
                    .text_color(tokens.placeholder.resolve_hsla())
                    .child(placeholder);
            }
            return text.into_any_element();
        }

        text = text.text_color(tokens.fg.resolve_hsla());
        if !focused {
            return text.child(descriptor.value.clone()).into_any_element();
        }

        let buffer = EditBuffer::new(descriptor.value.to_string(), state.selection);
        let selection = buffer.selection();
        let chars = buffer.text().chars().collect::<Vec<_>>();
        let before = chars[..selection.start].iter().collect::<String>();
        let selected = chars[selection.start..selection.end]
            .iter()
            .collect::<String>();
        let after = chars[selection.end..].iter().collect::<String>();

        let caret = div()
            .w(px(1.0))
            .h(px(size.font_size_px() + 4.0))
            .bg(tokens.caret.resolve_hsla());

        if selection.is_caret() {
            text.child(before).child(caret).child(after).into_any_element()
        } else {
            let mut highlight = tokens.border_focus.resolve_hsla();
            highlight.a = 0.25;
            text.child(before)
                .child(div().bg(highlight).child(selected))
                .child(after)
                .into_any_element()
        }
    }

    fn render_messages(messages: &[FormMessage], tokens: &NumberInputTokens) -> Option<AnyElement> {
        let visible = messages
            .iter()
            .filter(|message| message.is_visible())
            .map(|message| {
                let color = match message.kind {
                    MessageKind::Error => tokens.message_error.resolve_hsla(),
                    MessageKind::Success => tokens.message_success.resolve_hsla(),
                    MessageKind::Hint | MessageKind::ScreenReaderOnly => {
                        tokens.message_hint.resolve_hsla()
                    }
                };
                div().text_xs().text_color(color).child(message.text.clone())
            })
            .collect::<Vec<_>>();
        if visible.is_empty() {
            return None;
        }
        Some(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .children(visible)
                .into_any_element(),
        )
    }

    fn render_arrows(
        &self,
        events: &FieldEvents,
        focus_handle: &FocusHandle,
        interactive: bool,
        theme: &FormsTheme,
    ) -> AnyElement {
        let tokens = &theme.number_input;
        let arrow = |slot: &str, glyph: &'static str, direction: Direction| {
            let mut button = div()
                .id(self.id.slot(slot))
                .w(px(20.0))
                .flex_1()
                .flex()
                .items_center()
                .justify_center()
                .text_xs()
                .bg(tokens.arrows_bg.resolve_hsla())
                .text_color(tokens.arrows_fg.resolve_hsla())
                .border_l_1()
                .border_color(tokens.arrows_border.resolve_hsla())
                .child(glyph);
            if interactive {
                let events = events.clone();
                let focus_handle = focus_handle.clone();
                button = button
                    .cursor_pointer()
                    .on_click(move |_: &ClickEvent, window, cx| {
                        window.focus(&focus_handle);
                        events.focus(window, cx);
                        events.step(direction, window, cx);
                        cx.stop_propagation();
                    });
            }
            button
        };

        div()
            .flex()
            .flex_col()
            .h_full()
            .child(arrow("arrow-up", "▲", Direction::Increment))
            .child(arrow("arrow-down", "▼", Direction::Decrement))
            .into_any_element()
    }
}

/// What the event closures need; cloned into each of them.
#[derive(Clone)]
struct FieldEvents {
    id: WidgetId,
    config: NumberInputConfig,
    controlled: Option<String>,
    default_value: Option<String>,
    on_change: Option<ChangeHandler>,
    on_key_down: Option<KeyHandler>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
}

impl FieldEvents {
    fn load(&self) -> NumberInputController {
        let state = control::field_state(self.id.as_str(), || {
            self.config
                .initial_state(self.controlled.as_deref(), self.default_value.as_deref())
        });
        let mut controller = NumberInputController::new(self.config.clone(), state);
        controller.sync_locale();
        if let Some(value) = self.controlled.as_ref()
            && controller.display() != value
        {
            controller.set_display(value.clone());
        }
        controller
    }

    fn with_controller<R>(&self, update: impl FnOnce(&mut NumberInputController) -> R) -> R {
        let mut controller = self.load();
        let result = update(&mut controller);
        control::set_field_state(self.id.as_str(), controller.into_state());
        result
    }

    fn emit(&self, change: &ValueChange, window: &mut Window, cx: &mut gpui::App) {
        if let Some(handler) = self.on_change.as_ref() {
            (handler)(change, window, cx);
        }
        window.refresh();
    }

    fn focus(&self, window: &mut Window, cx: &mut gpui::App) {
        if self.with_controller(NumberInputController::focus)
            && let Some(handler) = self.on_focus.as_ref()
        {
            (handler)(window, cx);
        }
        window.refresh();
    }

    fn blur(&self, window: &mut Window, cx: &mut gpui::App) {
        if self.with_controller(NumberInputController::blur)
            && let Some(handler) = self.on_blur.as_ref()
        {
            (handler)(window, cx);
        }
        window.refresh();
    }

    fn step(&self, direction: Direction, window: &mut Window, cx: &mut gpui::App) {
        let change = self.with_controller(|controller| controller.step(direction));
        self.emit(&change, window, cx);
    }

    fn edit(
        &self,
        apply: impl FnOnce(&mut EditBuffer) -> bool,
        window: &mut Window,
        cx: &mut gpui::App,
    ) {
        let change = self.with_controller(|controller| {
            let mut buffer =
                EditBuffer::new(controller.display().to_string(), controller.state().selection);
            apply(&mut buffer)
                .then(|| controller.text_changed(buffer.text(), buffer.selection()))
        });
        match change {
            Some(change) => self.emit(&change, window, cx),
            None => window.refresh(),
        }
    }

    fn navigate(&self, apply: impl FnOnce(&mut EditBuffer), window: &mut Window) {
        self.with_controller(|controller| {
            let mut buffer =
                EditBuffer::new(controller.display().to_string(), controller.state().selection);
            apply(&mut buffer);
            controller.set_selection(buffer.selection());
        });
        window.refresh();
    }

    fn key_down(&self, event: &KeyDownEvent, window: &mut Window, cx: &mut gpui::App) {
        let keystroke = &event.keystroke;
        let modifiers = &keystroke.modifiers;
        let key = keystroke.key.as_str();
        let command = modifiers.control || modifiers.platform;
        let shift = modifiers.shift;

        if !command
            && !modifiers.alt
            && !modifiers.function
            && let KeyOutcome::Stepped(change) =
                self.with_controller(|controller| controller.key_down(key))
        {
            window.prevent_default();
            if let Some(handler) = self.on_key_down.as_ref() {
                (handler)(event, window, cx);
            }
            self.emit(&change, window, cx);
            cx.stop_propagation();
            return;
        }

        match (command, key) {
            (true, "a") => self.navigate(EditBuffer::select_all, window),
            (true, "v") => {
                if let Some(pasted) = cx.read_from_clipboard().and_then(|item| item.text()) {
                    self.edit(|buffer| buffer.insert_text(&pasted), window, cx);
                }
            }
            (false, "backspace") => self.edit(EditBuffer::delete_backward, window, cx),
            (false, "delete") => self.edit(EditBuffer::delete_forward, window, cx),
            (false, "left") => self.navigate(|buffer| buffer.move_left(shift), window),
            (false, "right") => self.navigate(|buffer| buffer.move_right(shift), window),
            (false, "home") => self.navigate(|buffer| buffer.move_home(shift), window),
            (false, "end") => self.navigate(|buffer| buffer.move_end(shift), window),
            (false, _) => {
                if let Some(typed) = keystroke
                    .key_char
                    .as_ref()
                    .filter(|typed| !typed.is_empty() && !typed.chars().any(char::is_control))
                {
                    self.edit(|buffer| buffer.insert_text(typed), window, cx);
                }
            }
            _ => {}
        }

        if let Some(handler) = self.on_key_down.as_ref() {
            (handler)(event, window, cx);
        }
    }
}

impl RenderOnce for NumberInput {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = FormsProvider::theme(cx);
        let tokens = &theme.number_input;
        let focus_handle = self.resolved_focus_handle(cx);

        let events = FieldEvents {
            id: self.id.clone(),
            config: self.config(cx),
            controlled: self.value.as_ref().map(ToString::to_string),
            default_value: self.default_value.as_ref().map(ToString::to_string),
            on_change: self.on_change.clone(),
            on_key_down: self.on_key_down.clone(),
            on_focus: self.on_focus.clone(),
            on_blur: self.on_blur.clone(),
        };
        let state = events.with_controller(|controller| controller.state().clone());
        let focused = state.focused || focus_handle.is_focused(window);
        let descriptor = self.descriptor(&state.display);
        let interactive = descriptor.interactive();

        let border = if descriptor.invalid {
            tokens.border_error.resolve_hsla()
        } else if focused {
            tokens.border_focus.resolve_hsla()
        } else {
            tokens.border.resolve_hsla()
        };

        let mut entry = div()
            .id(self.id.slot("entry"))
            .track_focus(&focus_handle)
            .flex()
            .flex_row()
            .items_center()
            .h(px(self.size.height_px()))
            .pl_2()
            .gap_2()
            .bg(tokens.bg.resolve_hsla())
            .border_1()
            .border_color(border)
            .rounded(px(4.0))
            .overflow_hidden()
            .child(Self::render_text(
                &descriptor,
                &state,
                focused,
                self.size,
                tokens,
            ));

        entry = match self.width {
            Some(width) => entry.w(px(width)),
            None if self.inline => entry.min_w(px(80.0)),
            None => entry.w_full(),
        };

        if descriptor.show_arrows {
            entry = entry.child(self.render_arrows(
                &events,
                &focus_handle,
                descriptor.arrows_interactive(),
                &theme,
            ));
        }

        if interactive {
            let events_for_click = events.clone();
            let events_for_key = events.clone();
            let events_for_blur = events.clone();
            let focus_for_click = focus_handle.clone();
            entry = entry
                .cursor_text()
                .on_click(move |_: &ClickEvent, window, cx| {
                    window.focus(&focus_for_click);
                    events_for_click.navigate(|buffer| buffer.move_end(false), window);
                    events_for_click.focus(window, cx);
                })
                .on_key_down(move |event, window, cx| {
                    events_for_key.key_down(event, window, cx);
                })
                .on_mouse_down_out(move |_, window, cx| {
                    if control::focused_state(events_for_blur.id.as_str()) {
                        events_for_blur.blur(window, cx);
                    }
                });
        } else {
            entry = entry.cursor_default().opacity(theme.disabled_opacity());
        }

        let label = Self::render_label(&descriptor, tokens);
        let messages = Self::render_messages(&self.messages, tokens);

        let mut root = div().id(self.id.shared()).flex().gap_1();
        root = match self.layout {
            FieldLayout::Stacked => root.flex_col(),
            FieldLayout::Inline => root.flex_row().items_center().gap_3(),
        };

        root.child(label).child(entry).children(messages)
    }
}
