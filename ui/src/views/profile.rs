use dioxus::prelude::*;
use rand::Rng;

use crate::components::widgets::{Avatar, Card, CardHeader, TabBar};
use crate::components::{Icon, IconKind};
use crate::core::data::{self, Fact};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Profile,
    Skills,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 2] = [ProfileTab::Profile, ProfileTab::Skills];

    fn label(self) -> String {
        match self {
            ProfileTab::Profile => t!("profile-tab-profile"),
            ProfileTab::Skills => t!("profile-tab-skills"),
        }
    }
}

/// Proficiency range for the decorative skill bars, in percent.
const SKILL_LEVELS: std::ops::Range<u8> = 60..100;

/// One random level per skill. Rolled once per mount.
pub fn roll_skill_levels<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<u8> {
    (0..count).map(|_| rng.gen_range(SKILL_LEVELS)).collect()
}

#[component]
pub fn Profile(dark_mode: bool) -> Element {
    let mut tab = use_signal(|| ProfileTab::Profile);
    let theme_class = if dark_mode { "dark" } else { "" };
    let labels: Vec<String> = ProfileTab::ALL.iter().map(|t| t.label()).collect();
    let active = ProfileTab::ALL
        .iter()
        .position(|t| *t == tab())
        .unwrap_or_default();

    rsx! {
        section { class: "page page-profile {theme_class}",
            Card { class: "profile",
                div { class: "profile__header",
                    Avatar {
                        name: data::PROFILE_NAME.to_string(),
                        src: data::PROFILE_AVATAR.to_string(),
                        class: "avatar--large",
                    }
                    div {
                        h1 { class: "profile__name", "{data::PROFILE_NAME}" }
                        p { class: "profile__title", "{data::PROFILE_TITLE}" }
                    }
                    div { class: "profile__actions",
                        button { r#type: "button", class: "button button--primary",
                            Icon { kind: IconKind::Mail }
                            {t!("profile-contact")}
                        }
                        button { r#type: "button", class: "button button--outline",
                            {t!("profile-portfolio")}
                            Icon { kind: IconKind::ArrowRight }
                        }
                    }
                }
                div { class: "tabs",
                    TabBar {
                        labels: labels,
                        active: active,
                        on_select: move |index: usize| {
                            if let Some(next) = ProfileTab::ALL.get(index) {
                                tab.set(*next);
                            }
                        },
                    }
                    div { class: "tabs__panel", role: "tabpanel",
                        {
                            match tab() {
                                ProfileTab::Profile => rsx! { ProfileFacts {} },
                                ProfileTab::Skills => rsx! { SkillBars {} },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileFacts() -> Element {
    rsx! {
        div { class: "profile__facts",
            for fact in data::PROFILE_FACTS {
                FactRow { key: "{fact.title}", fact: fact }
            }
        }
    }
}

#[component]
pub(crate) fn FactRow(fact: Fact) -> Element {
    rsx! {
        div { class: "fact",
            Icon { kind: fact.icon, class: "fact__icon" }
            div {
                h3 { class: "fact__title", "{fact.title}" }
                p { class: "fact__content", "{fact.content}" }
            }
        }
    }
}

#[component]
fn SkillBars() -> Element {
    let levels = use_hook(|| roll_skill_levels(&mut rand::thread_rng(), data::SKILLS.len()));

    rsx! {
        Card { class: "skills",
            CardHeader { title: t!("profile-skills-title") }
            div { class: "skills__list",
                for (skill, level) in data::SKILLS.iter().zip(levels.iter()) {
                    div { key: "{skill}", class: "skill",
                        div { class: "skill__meta",
                            span { class: "skill__name", "{skill}" }
                            span { class: "skill__level", "{level}%" }
                        }
                        div { class: "progress",
                            div { class: "progress__bar", style: "width: {level}%" }
                        }
                    }
                }
            }
            p { class: "skills__hint",
                Icon { kind: IconKind::Zap }
                {t!("profile-skills-hint")}
            }
        }
    }
}
