use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

use crate::controller::FieldState;

static FIELD_STATE: LazyLock<Mutex<HashMap<String, FieldState>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Retained state of the number field `id`, seeded with `init` on first use.
pub fn field_state(id: &str, init: impl FnOnce() -> FieldState) -> FieldState {
    match FIELD_STATE.lock() {
        Ok(mut state) => state.entry(id.to_string()).or_insert_with(init).clone(),
        Err(_) => init(),
    }
}

pub fn set_field_state(id: &str, value: FieldState) {
    if let Ok(mut state) = FIELD_STATE.lock() {
        state.insert(id.to_string(), value);
    }
}

pub fn focused_state(id: &str) -> bool {
    FIELD_STATE
        .lock()
        .ok()
        .and_then(|state| state.get(id).map(|field| field.focused))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_seeded_once() {
        let seeded = field_state("control-seed", || FieldState {
            display: "1".to_string(),
            ..FieldState::default()
        });
        assert_eq!(seeded.display, "1");

        let again = field_state("control-seed", || FieldState {
            display: "2".to_string(),
            ..FieldState::default()
        });
        assert_eq!(again.display, "1");
    }

    #[test]
    fn focus_follows_stored_state() {
        assert!(!focused_state("control-focus"));
        set_field_state(
            "control-focus",
            FieldState {
                focused: true,
                ..FieldState::default()
            },
        );
        assert!(focused_state("control-focus"));
        set_field_state("control-focus", FieldState::default());
        assert!(!focused_state("control-focus"));
    }
}
