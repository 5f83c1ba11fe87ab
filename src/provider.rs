use std::sync::Arc;

use crate::numeric::{DelimiterLookup, DelimiterTable, LocaleFormatter};
use crate::theme::FormsTheme;

/// App-wide configuration for the form widgets.
///
/// The locale set here is the *contextual* locale: widgets use it unless they
/// carry an explicit one, and fall back to the system locale without either.
#[derive(Default)]
pub struct FormsProvider {
    theme: Option<FormsTheme>,
    locale: Option<Option<String>>,
    formatter: Option<LocaleFormatter>,
}

#[derive(Clone)]
struct ProviderGlobal {
    theme: Arc<FormsTheme>,
    locale: Option<String>,
    formatter: LocaleFormatter,
}

impl gpui::Global for ProviderGlobal {}

impl FormsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, configure: impl FnOnce(FormsTheme) -> FormsTheme) -> Self {
        let current = self.theme.take().unwrap_or_default();
        self.theme = Some(configure(current));
        self
    }

    pub fn set_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(Some(locale.into()));
        self
    }

    /// Drops a previously set contextual locale on the next `init`.
    pub fn clear_locale(mut self) -> Self {
        self.locale = Some(None);
        self
    }

    pub fn set_delimiters(mut self, lookup: impl DelimiterLookup + Send + Sync + 'static) -> Self {
        self.formatter = Some(LocaleFormatter::new(lookup));
        self
    }

    pub fn init(self, cx: &mut gpui::App) {
        if cx.has_global::<ProviderGlobal>() {
            let global = cx.global_mut::<ProviderGlobal>();
            if let Some(theme) = self.theme {
                global.theme = Arc::new(theme);
            }
            if let Some(locale) = self.locale {
                global.locale = locale;
            }
            if let Some(formatter) = self.formatter {
                global.formatter = formatter;
            }
            return;
        }

        cx.set_global(ProviderGlobal {
            theme: Arc::new(self.theme.unwrap_or_default()),
            locale: self.locale.flatten(),
            formatter: self
                .formatter
                .unwrap_or_else(|| LocaleFormatter::new(DelimiterTable::builtin())),
        });
    }

    pub fn theme(cx: &gpui::App) -> Arc<FormsTheme> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.theme.clone())
            .unwrap_or_else(|| Arc::new(FormsTheme::default()))
    }

    pub fn locale(cx: &gpui::App) -> Option<String> {
        cx.try_global::<ProviderGlobal>()
            .and_then(|global| global.locale.clone())
    }

    pub fn formatter(cx: &gpui::App) -> LocaleFormatter {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.formatter.clone())
            .unwrap_or_default()
    }
}
