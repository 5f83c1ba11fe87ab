use std::fmt;

use gpui::SharedString;

/// Identifier of a widget instance, also used as the key for its retained state.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct WidgetId(SharedString);

impl WidgetId {
    /// Derives an id from the caller's source location, so the same call site
    /// gets the same id on every frame.
    #[track_caller]
    pub fn auto(prefix: &str) -> Self {
        let location = std::panic::Location::caller();
        let seed = format!("{}:{}:{}", location.file(), location.line(), location.column());
        Self(format!("{prefix}_{:016x}", fnv1a64(seed.as_bytes())).into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn shared(&self) -> SharedString {
        self.0.clone()
    }

    /// Id of a child element, e.g. the arrow buttons of a number input.
    pub fn slot(&self, name: &str) -> SharedString {
        format!("{}::{name}", self.0).into()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for WidgetId {
    fn from(value: &str) -> Self {
        Self(value.to_string().into())
    }
}

impl From<String> for WidgetId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<SharedString> for WidgetId {
    fn from(value: SharedString) -> Self {
        Self(value)
    }
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
