//! Platform detection and document-level side effects.

use tracing::warn;

use super::theme::{ThemePreference, DARK_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Add or remove the `dark` class on `<html>` so global styles follow the
/// preference.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_theme(pref: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("document element unavailable; theme class not applied");
        return;
    };

    let classes = root.class_list();
    let outcome = if pref.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if outcome.is_err() {
        warn!(dark = pref.is_dark(), "unable to update document theme class");
    }
}

/// Desktop renders into a webview; drive the same class through `eval`.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_theme(pref: ThemePreference) {
    let script = document_theme_script(pref);
    let eval = dioxus::document::eval(&script);
    dioxus::prelude::spawn(async move {
        if let Err(err) = eval.await {
            warn!(?err, "unable to update document theme class");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn document_theme_script(pref: ThemePreference) -> String {
    format!(
        "document.documentElement.classList.toggle('{DARK_CLASS}', {});",
        pref.is_dark()
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_reports_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert_eq!(Platform::current().label(), "desktop");
    }

    #[test]
    fn theme_script_forces_class_state() {
        assert_eq!(
            document_theme_script(ThemePreference::DARK),
            "document.documentElement.classList.toggle('dark', true);"
        );
        assert_eq!(
            document_theme_script(ThemePreference::LIGHT),
            "document.documentElement.classList.toggle('dark', false);"
        );
    }
}
