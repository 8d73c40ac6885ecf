use dioxus::prelude::*;

use ui::components::{register_nav, AppShell, NavBuilder, RoutedPage};
use ui::core::routes::Page;
use ui::i18n::{self, ActiveLocale};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn nav_link(page: Page, class: &'static str, content: Element) -> Element {
    rsx!(Link {
        class: "{class}",
        active_class: "is-active",
        to: Route::from(page),
        {content}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    register_nav(NavBuilder { link: nav_link });

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| ActiveLocale(lang_code));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { key: "{lang_code()}", class: "app-root",
            Router::<Route> {}
        }
    }
}

/// Web router layout around the shared shell.
#[component]
fn WebShell() -> Element {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn routes_round_trip_through_page_paths() {
        for page in Page::ALL {
            let route = Route::from(page);
            assert_eq!(route.to_string(), page.path());
            assert_eq!(Route::from_str(page.path()).ok(), Some(route));
        }
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert!(Route::from_str("/reports").is_err());
    }
}
