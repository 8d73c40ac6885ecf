#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, AppShell, NavBuilder, RoutedPage};
use ui::core::routes::Page;
use ui::i18n::ActiveLocale;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
    #[route("/settings")]
    Settings {},
    #[route("/profile")]
    Profile {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Dashboard => Route::Dashboard {},
            Page::Settings => Route::Settings {},
            Page::Profile => Route::Profile {},
            Page::About => Route::About {},
            Page::Contact => Route::Contact {},
        }
    }
}

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Shellboard – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

fn nav_link(page: Page, class: &'static str, content: Element) -> Element {
    rsx! {
        Link { class: "{class}", active_class: "is-active", to: Route::from(page), {content} }
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| ActiveLocale(lang_code));

    register_nav(NavBuilder { link: nav_link });

    // Some window managers ignore the builder's maximize hint.
    let win = dioxus::desktop::use_window();
    use_effect(move || {
        win.set_maximized(true);
    });

    rsx! {
        // Desktop always inlines the shared theme; there is no separate asset file.
        document::Style { "{ui::THEME_CSS_INLINE}" }

        // Keyed on the language so the whole routed tree remounts on change.
        div { key: "{lang_code()}", class: "app-root",
            Router::<Route> {}
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! { RoutedPage { page: Page::Dashboard } }
}

#[component]
fn Settings() -> Element {
    rsx! { RoutedPage { page: Page::Settings } }
}

#[component]
fn Profile() -> Element {
    rsx! { RoutedPage { page: Page::Profile } }
}

#[component]
fn About() -> Element {
    rsx! { RoutedPage { page: Page::About } }
}

#[component]
fn Contact() -> Element {
    rsx! { RoutedPage { page: Page::Contact } }
}
