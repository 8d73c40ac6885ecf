//! Internationalization (i18n) support for `shellboard-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/shellboard_ui.ftl   (fallback/reference)
//!   es-ES/shellboard_ui.ftl
//!   fr-FR/shellboard_ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let home_label = t!("nav-home");
//! ```
//!
//! Platform crates provide an [`ActiveLocale`] context; the Settings page
//! switches language through [`ActiveLocale::switch`], and platforms key
//! their routed subtree on the code so every view re-renders.
//!
//! Mock page content (names, company copy, transactions) is not localized.
use std::sync::Once;

use dioxus::prelude::*;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("contact-missing-field", field = "Email")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "shellboard_ui"; // `fl!` derives the domain from the package name with `-` mapped to `_`

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language tag currently loaded (first in the negotiated list).
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Native name for a locale tag, for the language picker.
pub fn language_name(tag: &str) -> &str {
    match tag.split('-').next().unwrap_or(tag) {
        "en" => "English",
        "es" => "Español",
        "fr" => "Français",
        "de" => "Deutsch",
        "ja" => "日本語",
        _ => tag,
    }
}

/// Reactive handle on the active locale code, provided by the platform root.
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveLocale(pub Signal<String>);

impl ActiveLocale {
    pub fn code(&self) -> String {
        (self.0)()
    }

    /// Load `tag` and publish it so keyed subtrees remount.
    pub fn switch(mut self, tag: &str) {
        match set_language(tag) {
            Ok(()) => {
                tracing::info!(lang = tag, "language switched");
                self.0.set(tag.to_string());
            }
            Err(err) => tracing::warn!(%err, lang = tag, "language switch failed"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Home");
    }

    #[test]
    fn every_locale_ships_a_file_for_the_loader_domain() {
        for tag in available_languages() {
            let path = format!("{tag}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
        init();
        assert!(!current_language().is_empty());
    }

    #[test]
    fn language_names_cover_embedded_locales() {
        for tag in available_languages() {
            assert_ne!(language_name(&tag), tag.as_str(), "no display name for {tag}");
        }
        assert_eq!(language_name("xx-YY"), "xx-YY");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
