use dioxus::prelude::*;

use crate::core::routes::Page;

mod about;
pub use about::{About, AboutTab, CompanyTopic};

mod contact;
pub use contact::Contact;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::{Profile, ProfileTab};

mod settings;
pub use settings::{Settings, SettingsSection};

/// Renders the view for `page`, and only that view.
#[component]
pub fn PageView(page: Page, dark_mode: bool) -> Element {
    match page {
        Page::Dashboard => rsx! { Dashboard { dark_mode: dark_mode } },
        Page::Settings => rsx! { Settings { dark_mode: dark_mode } },
        Page::Profile => rsx! { Profile { dark_mode: dark_mode } },
        Page::About => rsx! { About { dark_mode: dark_mode } },
        Page::Contact => rsx! { Contact { dark_mode: dark_mode } },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn page_html(page: Page) -> String {
        // `VirtualDom::new` takes a plain fn, so dispatch through one per page.
        fn dashboard() -> Element {
            rsx! { PageView { page: Page::Dashboard, dark_mode: false } }
        }
        fn settings() -> Element {
            rsx! { PageView { page: Page::Settings, dark_mode: false } }
        }
        fn profile() -> Element {
            rsx! { PageView { page: Page::Profile, dark_mode: false } }
        }
        fn about() -> Element {
            rsx! { PageView { page: Page::About, dark_mode: false } }
        }
        fn contact() -> Element {
            rsx! { PageView { page: Page::Contact, dark_mode: false } }
        }

        let app: fn() -> Element = match page {
            Page::Dashboard => dashboard,
            Page::Settings => settings,
            Page::Profile => profile,
            Page::About => about,
            Page::Contact => contact,
        };
        render::to_html(app)
    }

    fn marker(page: Page) -> &'static str {
        match page {
            Page::Dashboard => "page-dashboard",
            Page::Settings => "page-settings",
            Page::Profile => "page-profile",
            Page::About => "page-about",
            Page::Contact => "page-contact",
        }
    }

    #[test]
    fn each_page_renders_its_view_and_no_other() {
        for page in Page::ALL {
            let html = page_html(page);
            for other in Page::ALL {
                let present = html.contains(marker(other));
                assert_eq!(present, other == page, "{page:?} render vs {other:?} marker");
            }
        }
    }
}
