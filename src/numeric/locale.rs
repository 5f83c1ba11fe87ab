use std::collections::HashMap;
use std::sync::Arc;

use super::CANONICAL_DELIMITER;

/// Resolves a locale tag to its decimal delimiter.
pub trait DelimiterLookup {
    fn decimal_delimiter(&self, locale: &str) -> Option<char>;
}

impl<F> DelimiterLookup for F
where
    F: Fn(&str) -> Option<char>,
{
    fn decimal_delimiter(&self, locale: &str) -> Option<char> {
        self(locale)
    }
}

const BUILTIN_DELIMITERS: &[(&str, char)] = &[
    ("bg", ','),
    ("chs", '.'),
    ("cs", ','),
    ("da-dk", ','),
    ("de", ','),
    ("de-ch", '.'),
    ("en", '.'),
    ("en-au", '.'),
    ("en-gb", '.'),
    ("en-za", ','),
    ("es", ','),
    ("es-es", ','),
    ("et", ','),
    ("fi", ','),
    ("fr", ','),
    ("fr-ca", ','),
    ("fr-ch", '.'),
    ("hu", ','),
    ("it", ','),
    ("ja", '.'),
    ("lv", ','),
    ("nb", ','),
    ("nl-be", ','),
    ("nl-nl", ','),
    ("no", ','),
    ("pl", ','),
    ("pt-br", ','),
    ("pt-pt", ','),
    ("ru", ','),
    ("ru-ua", ','),
    ("sk", ','),
    ("sl", ','),
    ("sv", ','),
    ("th", '.'),
    ("tr", ','),
    ("uk-ua", ','),
    ("vi", ','),
    ("zh", '.'),
];

/// Locale tag to decimal delimiter table.
///
/// Tags are matched case-insensitively after normalization; a tag with no
/// entry of its own falls back to its language subtag (`de-AT` uses `de`).
#[derive(Clone, Debug, Default)]
pub struct DelimiterTable {
    entries: HashMap<String, char>,
}

impl DelimiterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        BUILTIN_DELIMITERS
            .iter()
            .fold(Self::new(), |table, (tag, delimiter)| {
                table.with(tag, *delimiter)
            })
    }

    pub fn with(mut self, locale: &str, delimiter: char) -> Self {
        self.insert(locale, delimiter);
        self
    }

    pub fn insert(&mut self, locale: &str, delimiter: char) {
        self.entries.insert(normalize_locale_tag(locale), delimiter);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DelimiterLookup for DelimiterTable {
    fn decimal_delimiter(&self, locale: &str) -> Option<char> {
        let normalized = normalize_locale_tag(locale);
        if let Some(delimiter) = self.entries.get(&normalized) {
            return Some(*delimiter);
        }

        let language = normalized.split('-').next().unwrap_or_default();
        self.entries.get(language).copied()
    }
}

/// Converts numbers between canonical and locale-displayed text.
#[derive(Clone)]
pub struct LocaleFormatter {
    lookup: Arc<dyn DelimiterLookup + Send + Sync>,
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new(DelimiterTable::builtin())
    }
}

impl std::fmt::Debug for LocaleFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleFormatter").finish_non_exhaustive()
    }
}

impl LocaleFormatter {
    pub fn new(lookup: impl DelimiterLookup + Send + Sync + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// The decimal delimiter for `locale`, `.` when unset or unknown.
    pub fn delimiter_for(&self, locale: Option<&str>) -> char {
        let Some(locale) = locale.map(str::trim).filter(|locale| !locale.is_empty()) else {
            return CANONICAL_DELIMITER;
        };

        match self.lookup.decimal_delimiter(locale) {
            Some(delimiter) => delimiter,
            None => {
                tracing::debug!(locale, "no decimal delimiter registered; using '.'");
                CANONICAL_DELIMITER
            }
        }
    }

    pub fn to_display(&self, canonical: &str, locale: Option<&str>) -> String {
        replace_delimiter(canonical, CANONICAL_DELIMITER, self.delimiter_for(locale))
    }

    pub fn to_canonical(&self, display: &str, locale: Option<&str>) -> String {
        replace_delimiter(display, self.delimiter_for(locale), CANONICAL_DELIMITER)
    }

    /// Rewrites a live display string for a new locale without re-parsing it.
    pub fn relocalize(&self, display: &str, from: Option<&str>, to: Option<&str>) -> String {
        replace_delimiter(display, self.delimiter_for(from), self.delimiter_for(to))
    }
}

pub fn replace_delimiter(text: &str, from: char, to: char) -> String {
    if from == to {
        return text.to_string();
    }
    text.chars()
        .map(|ch| if ch == from { to } else { ch })
        .collect()
}

/// Picks the effective locale: explicit, then contextual, then system.
pub fn resolve_locale(
    explicit: Option<&str>,
    contextual: Option<&str>,
    system: Option<&str>,
) -> Option<String> {
    [explicit, contextual, system]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|locale| !locale.is_empty())
        .map(str::to_string)
}

#[cfg(feature = "i18n")]
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}

#[cfg(not(feature = "i18n"))]
pub fn system_locale() -> Option<String> {
    None
}

fn normalize_locale_tag(tag: &str) -> String {
    let trimmed = tag.trim();
    let without_encoding = trimmed.split('.').next().unwrap_or(trimmed);
    let without_variant = without_encoding
        .split('@')
        .next()
        .unwrap_or(without_encoding);
    without_variant
        .replace('_', "-")
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
