use std::rc::Rc;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::info;

use crate::components::{Icon, IconKind};
use crate::core::platform::{self, Platform};
use crate::core::routes::Page;
use crate::core::storage::{KeyValueStore, LocalStore, StorageError};
use crate::core::theme::{self, ThemePreference};
use crate::i18n;
use crate::t;
use crate::views::PageView;

// Shell stylesheet (and inline copy for release native builds)
const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");
const SHELL_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/shell.css"
));

/// Platforms register a `NavBuilder` so the shell can render router links
/// without knowing the platform's `Route` enum.
///
/// `link` receives the target page, the CSS class to apply and the link's
/// content (icon + label), and must return a fully constructed `Link`:
///
/// ```ignore
/// fn nav_link(page: Page, class: &'static str, content: Element) -> Element {
///     rsx!(Link { class, active_class: "is-active", to: Route::from(page), {content} })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder the shell falls back to plain anchors.
pub struct NavBuilder {
    pub link: fn(page: Page, class: &'static str, content: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

fn nav_link(page: Page, class: &'static str, content: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(page, class, content),
        None => rsx! {
            a { class: "{class}", href: "{page.path()}", {content} }
        },
    }
}

/// Preference backend used by the shell. Provide one through context above
/// [`AppShell`] to replace the platform's [`LocalStore`].
#[derive(Clone)]
pub struct PreferenceStore(Rc<dyn KeyValueStore>);

impl PreferenceStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn local() -> Self {
        Self::new(LocalStore::open())
    }
}

impl KeyValueStore for PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set(key, value)
    }
}

/// The shell's theme as seen by routed pages: read-only, plus the same
/// toggle the header button uses.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    theme: ReadOnlySignal<ThemePreference>,
    toggle: Callback<()>,
}

impl ThemeContext {
    pub fn current(&self) -> ThemePreference {
        (self.theme)()
    }

    /// Flip and persist the preference.
    pub fn toggle(&self) {
        self.toggle.call(());
    }
}

fn sidebar_class(open: bool) -> &'static str {
    if open {
        "sidebar sidebar--open"
    } else {
        "sidebar"
    }
}

/// Persistent navigation and theme wrapper around the routed page.
#[component]
pub fn AppShell(children: Element) -> Element {
    i18n::init();

    let provided = try_use_context::<PreferenceStore>();
    let store = use_hook(move || provided.unwrap_or_else(PreferenceStore::local));
    let mut theme = use_signal({
        let store = store.clone();
        move || theme::restore(&store)
    });
    let mut sidebar_open = use_signal(|| false);

    let toggle_theme = use_callback(move |()| {
        let next = theme::toggle(&store, theme());
        info!(dark = next.is_dark(), "theme toggled");
        theme.set(next);
    });
    use_context_provider(|| ThemeContext {
        theme: ReadOnlySignal::new(theme),
        toggle: toggle_theme,
    });

    use_hook(|| {
        info!(
            platform = Platform::current().label(),
            dark = theme.peek().is_dark(),
            "shell mounted"
        );
    });

    // Keep the document class in step with the preference (including the
    // restored value on first render).
    use_effect(move || platform::apply_document_theme(theme()));

    // Subscribe to the active locale so labels refresh on language change.
    let _lang_marker = try_use_context::<i18n::ActiveLocale>()
        .map(|locale| locale.code())
        .unwrap_or_default();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %_lang_marker, dark = theme().is_dark(), "AppShell render");

    let pref = theme();
    let sidebar_class = sidebar_class(sidebar_open());
    let menu_label = t!("sidebar-toggle-label");
    let theme_label = if pref.is_dark() {
        t!("theme-toggle-light")
    } else {
        t!("theme-toggle-dark")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SHELL_CSS_INLINE}" }
        }

        div { class: "shell {pref.css_class()}",
            aside { class: sidebar_class, id: "sidebar",
                div { class: "sidebar__header",
                    h2 { class: "sidebar__brand", {t!("shell-brand")} }
                }
                nav { class: "sidebar__menu",
                    for page in Page::menu() {
                        div { key: "{page.path()}", class: "sidebar__item",
                            {nav_link(page, "sidebar__link", rsx! {
                                Icon { kind: page.icon() }
                                span { {page.label()} }
                            })}
                        }
                    }
                }
                div { class: "sidebar__footer",
                    {nav_link(Page::Profile, "button button--outline sidebar__profile", rsx! {
                        Icon { kind: Page::Profile.icon() }
                        span { {Page::Profile.label()} }
                    })}
                }
            }

            div { class: "shell__inset",
                header { class: "shell__header",
                    button {
                        r#type: "button",
                        class: "button button--ghost shell__menu-toggle",
                        aria_controls: "sidebar",
                        aria_expanded: "{sidebar_open()}",
                        aria_label: "{menu_label}",
                        onclick: move |_| {
                            let open = sidebar_open();
                            sidebar_open.set(!open);
                        },
                        Icon { kind: IconKind::Menu }
                    }
                    h1 { class: "shell__title", {t!("shell-title")} }
                    button {
                        r#type: "button",
                        class: "button button--ghost shell__theme-toggle",
                        aria_label: "{theme_label}",
                        title: "{theme_label}",
                        onclick: move |_| toggle_theme.call(()),
                        if pref.is_dark() {
                            Icon { kind: IconKind::Sun }
                        } else {
                            Icon { kind: IconKind::Moon }
                        }
                    }
                }
                main { class: "shell__main", {children} }
            }
        }
    }
}

/// Route target used by platform crates: reads the shell's theme and hands
/// it to the page as a plain prop.
#[component]
pub fn RoutedPage(page: Page) -> Element {
    let dark_mode = try_use_context::<ThemeContext>()
        .map(|ctx| ctx.current().is_dark())
        .unwrap_or(false);

    rsx! {
        PageView { page: page, dark_mode: dark_mode }
    }
}
