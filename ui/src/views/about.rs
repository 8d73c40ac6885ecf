use dioxus::prelude::*;

use crate::components::widgets::{Avatar, Card, CardHeader, TabBar};
use crate::components::{Icon, IconKind};
use crate::core::data::{self, Fact};
use crate::core::disclosure::{is_open, toggle_single};
use crate::t;

use super::settings::item_class;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutTab {
    Overview,
    Team,
    History,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::Overview, AboutTab::Team, AboutTab::History];

    fn label(self) -> String {
        match self {
            AboutTab::Overview => t!("about-tab-overview"),
            AboutTab::Team => t!("about-tab-team"),
            AboutTab::History => t!("about-tab-history"),
        }
    }
}

/// Expandable topics on the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyTopic {
    WhoWeAre,
    Mission,
    GlobalPresence,
}

impl CompanyTopic {
    pub const ALL: [CompanyTopic; 3] = [
        CompanyTopic::WhoWeAre,
        CompanyTopic::Mission,
        CompanyTopic::GlobalPresence,
    ];

    pub fn fact(self) -> Fact {
        match self {
            CompanyTopic::WhoWeAre => data::COMPANY_TOPICS[0],
            CompanyTopic::Mission => data::COMPANY_TOPICS[1],
            CompanyTopic::GlobalPresence => data::COMPANY_TOPICS[2],
        }
    }
}

#[component]
pub fn About(dark_mode: bool) -> Element {
    let mut tab = use_signal(|| AboutTab::Overview);
    let theme_class = if dark_mode { "dark" } else { "" };
    let labels: Vec<String> = AboutTab::ALL.iter().map(|t| t.label()).collect();
    let active = AboutTab::ALL
        .iter()
        .position(|t| *t == tab())
        .unwrap_or_default();

    rsx! {
        section { class: "page page-about {theme_class}",
            Card { class: "hero",
                h1 { class: "hero__title", "{data::COMPANY_NAME}" }
                p { class: "hero__tagline", "{data::COMPANY_TAGLINE}" }
                a { class: "button button--primary", href: "#",
                    {t!("about-get-in-touch")}
                    Icon { kind: IconKind::ArrowRight }
                }
            }
            div { class: "tabs",
                TabBar {
                    labels: labels,
                    active: active,
                    on_select: move |index: usize| {
                        if let Some(next) = AboutTab::ALL.get(index) {
                            tab.set(*next);
                        }
                    },
                }
                div { class: "tabs__panel", role: "tabpanel",
                    {
                        match tab() {
                            AboutTab::Overview => rsx! { Overview {} },
                            AboutTab::Team => rsx! { Team {} },
                            AboutTab::History => rsx! { History {} },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Overview() -> Element {
    let mut open = use_signal(|| Option::<CompanyTopic>::None);

    rsx! {
        Card { class: "overview",
            CardHeader { title: t!("about-overview-title") }
            div { class: "accordion",
                for topic in CompanyTopic::ALL {
                    {
                        let fact = topic.fact();
                        let expanded = is_open(&open(), &topic);
                        let chevron = if expanded { IconKind::ChevronUp } else { IconKind::ChevronDown };
                        rsx! {
                            div { key: "{fact.title}", class: item_class(expanded),
                                button {
                                    r#type: "button",
                                    class: "accordion__trigger",
                                    aria_expanded: "{expanded}",
                                    onclick: move |_| {
                                        let next = toggle_single(open(), topic);
                                        open.set(next);
                                    },
                                    span { class: "accordion__title",
                                        Icon { kind: fact.icon }
                                        "{fact.title}"
                                    }
                                    Icon { kind: chevron, class: "accordion__chevron" }
                                }
                                if expanded {
                                    p { class: "accordion__content", "{fact.content}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Team() -> Element {
    rsx! {
        Card { class: "team",
            CardHeader { title: t!("about-team-title") }
            div { class: "team__grid",
                for member in data::TEAM {
                    div { key: "{member.name}", class: "team__member",
                        Avatar {
                            name: member.name.to_string(),
                            src: member.image.to_string(),
                        }
                        h3 { class: "team__name", "{member.name}" }
                        p { class: "team__role", "{member.role}" }
                    }
                }
            }
        }
    }
}

#[component]
fn History() -> Element {
    rsx! {
        Card { class: "history",
            CardHeader { title: t!("about-history-title") }
            ol { class: "timeline",
                for milestone in data::MILESTONES {
                    li { key: "{milestone.year}", class: "timeline__item",
                        span { class: "timeline__year", "{milestone.year}" }
                        div {
                            h3 { class: "timeline__title", "{milestone.title}" }
                            p { class: "timeline__description", "{milestone.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disclosure::expanded;
    use crate::views::render::to_html;

    #[test]
    fn topics_map_onto_company_facts() {
        let titles: Vec<_> = CompanyTopic::ALL.iter().map(|t| t.fact().title).collect();
        assert_eq!(titles, ["Who We Are", "Our Mission", "Global Presence"]);
    }

    #[test]
    fn opening_a_topic_closes_the_previous_one() {
        let open = toggle_single(None, CompanyTopic::WhoWeAre);
        let open = toggle_single(open, CompanyTopic::Mission);
        assert_eq!(
            expanded(&CompanyTopic::ALL, &open),
            vec![&CompanyTopic::Mission]
        );
    }

    #[test]
    fn overview_is_the_default_tab() {
        fn app() -> Element {
            rsx! { About { dark_mode: false } }
        }
        let html = to_html(app);
        assert!(html.contains(data::COMPANY_NAME));
        assert!(html.contains("Who We Are"));
        assert!(!html.contains("accordion__content"));
        assert!(!html.contains("team__grid"));
        assert!(!html.contains("timeline"));
    }

    #[test]
    fn team_and_history_list_all_entries() {
        fn team() -> Element {
            rsx! { Team {} }
        }
        fn history() -> Element {
            rsx! { History {} }
        }
        let team_html = to_html(team);
        for member in data::TEAM {
            assert!(team_html.contains(member.name), "{}", member.name);
        }
        let history_html = to_html(history);
        assert_eq!(
            history_html.matches("timeline__item").count(),
            data::MILESTONES.len()
        );
    }
}
