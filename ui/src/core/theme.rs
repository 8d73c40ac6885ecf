//! Light/dark theme preference: restore, toggle and persist.
//!
//! The preference is a single boolean stored under [`DARK_MODE_KEY`] as the
//! literal string `"true"` or `"false"`. Anything else (including a missing
//! key) reads as light.

use tracing::{debug, warn};

use super::storage::KeyValueStore;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Class applied to the document element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreference {
    dark: bool,
}

impl ThemePreference {
    pub const LIGHT: Self = Self { dark: false };
    pub const DARK: Self = Self { dark: true };

    pub fn is_dark(self) -> bool {
        self.dark
    }

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn storage_value(self) -> &'static str {
        if self.dark {
            "true"
        } else {
            "false"
        }
    }

    pub fn from_storage_value(raw: Option<&str>) -> Self {
        Self {
            dark: raw == Some("true"),
        }
    }

    /// Class list fragment for wrappers that scope their own styling.
    pub fn css_class(self) -> &'static str {
        if self.dark {
            DARK_CLASS
        } else {
            ""
        }
    }
}

/// Read the stored preference, defaulting to light on absence or error.
pub fn restore(store: &impl KeyValueStore) -> ThemePreference {
    match store.get(DARK_MODE_KEY) {
        Ok(raw) => {
            let pref = ThemePreference::from_storage_value(raw.as_deref());
            debug!(dark = pref.is_dark(), "restored theme preference");
            pref
        }
        Err(err) => {
            warn!(%err, "unable to read theme preference; using light");
            ThemePreference::LIGHT
        }
    }
}

/// Write the preference. Failures are logged and otherwise ignored.
pub fn persist(store: &impl KeyValueStore, pref: ThemePreference) {
    if let Err(err) = store.set(DARK_MODE_KEY, pref.storage_value()) {
        warn!(%err, dark = pref.is_dark(), "unable to persist theme preference");
    }
}

/// Flip `current`, persist the result and return it.
pub fn toggle(store: &impl KeyValueStore, current: ThemePreference) -> ThemePreference {
    let next = current.toggled();
    persist(store, next);
    next
}
