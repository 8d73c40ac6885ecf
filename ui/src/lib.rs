//! Shared UI crate for Shellboard. The layout shell, page views and all
//! platform-agnostic state live here; the `web` and `desktop` crates only
//! define routes and launch.

use dioxus::prelude::*;

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Layout shell, nav registration and routed page host (components/app_shell.rs)
    pub mod app_shell;
    pub use app_shell::register_nav;
    pub use app_shell::AppShell;
    pub use app_shell::NavBuilder;
    pub use app_shell::PreferenceStore;
    pub use app_shell::RoutedPage;
    pub use app_shell::ThemeContext;

    pub mod icons;
    pub use icons::{Icon, IconKind};

    pub mod widgets;
}

/// Unified stylesheet shared by every platform.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same stylesheet embedded for native builds that inline their CSS.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
