//! The fixed navigation table shared by every platform.
//!
//! Platform crates own the `Routable` enum; this module only knows paths,
//! labels and icons so the shell can render navigation without depending on
//! a platform's `Route` type.

use crate::components::IconKind;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Contact,
    About,
    Settings,
    Profile,
}

impl Page {
    /// Every page, in sidebar order. `Profile` is rendered in the footer.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Contact,
        Page::About,
        Page::Settings,
        Page::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Contact => "/contact",
            Page::About => "/about",
            Page::Settings => "/settings",
            Page::Profile => "/profile",
        }
    }

    /// Exact-match lookup for checking the table. Trailing slashes are
    /// tolerated. The platform `Routable` enums do the real routing.
    #[cfg(test)]
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|page| page.path() == normalized)
    }

    pub fn icon(self) -> IconKind {
        match self {
            Page::Dashboard => IconKind::Home,
            Page::Contact => IconKind::Contact,
            Page::About => IconKind::CircleHelp,
            Page::Settings => IconKind::Settings,
            Page::Profile => IconKind::User,
        }
    }

    /// Localized navigation label.
    pub fn label(self) -> String {
        match self {
            Page::Dashboard => t!("nav-home"),
            Page::Contact => t!("nav-contact"),
            Page::About => t!("nav-about"),
            Page::Settings => t!("nav-settings"),
            Page::Profile => t!("nav-profile"),
        }
    }

    /// Pages listed in the sidebar menu body.
    pub fn menu() -> impl Iterator<Item = Page> {
        Page::ALL.into_iter().filter(|page| *page != Page::Profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_path_maps_back_to_its_page_only() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
            let others = Page::ALL
                .into_iter()
                .filter(|other| *other != page && Page::from_path(page.path()) == Some(*other))
                .count();
            assert_eq!(others, 0);
        }
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(Page::from_path("/settings/extra"), None);
        assert_eq!(Page::from_path("settings"), None);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
        assert_eq!(Page::from_path(""), Some(Page::Dashboard));
    }

    #[test]
    fn menu_excludes_footer_profile() {
        let menu: Vec<_> = Page::menu().collect();
        assert_eq!(
            menu,
            vec![Page::Dashboard, Page::Contact, Page::About, Page::Settings]
        );
    }

    #[test]
    fn labels_resolve_in_fallback_locale() {
        crate::i18n::init();
        crate::i18n::set_language("en-US").unwrap();
        assert_eq!(Page::Dashboard.label(), "Home");
        assert_eq!(Page::Profile.label(), "Profile");
    }
}
