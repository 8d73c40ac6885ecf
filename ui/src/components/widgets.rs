//! Small presentational building blocks shared by the pages.

use dioxus::prelude::*;

use crate::core::format::initials;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        section { class: "card {class}", {children} }
    }
}

#[component]
pub fn CardHeader(title: String, #[props(default)] description: Option<String>) -> Element {
    rsx! {
        header { class: "card__header",
            h2 { class: "card__title", "{title}" }
            if let Some(text) = description {
                p { class: "card__description", "{text}" }
            }
        }
    }
}

/// Image avatar that falls back to initials when the image fails to load.
#[component]
pub fn Avatar(name: String, src: String, #[props(default)] class: String) -> Element {
    let mut failed = use_signal(|| false);
    let fallback = initials(&name);

    rsx! {
        span { class: "avatar {class}",
            if failed() {
                span { class: "avatar__fallback", aria_label: "{name}", "{fallback}" }
            } else {
                img {
                    class: "avatar__image",
                    src: "{src}",
                    alt: "{name}",
                    onerror: move |_| failed.set(true),
                }
            }
        }
    }
}

#[component]
pub fn Switch(id: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    let class = if checked { "switch switch--on" } else { "switch" };

    rsx! {
        button {
            r#type: "button",
            id: "{id}",
            role: "switch",
            class: "{class}",
            aria_checked: "{checked}",
            onclick: move |_| on_toggle.call(!checked),
            span { class: "switch__thumb" }
        }
    }
}

/// Tab strip. Exactly one entry is active; selection is reported by index.
#[component]
pub fn TabBar(labels: Vec<String>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "tabs__list", role: "tablist",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    r#type: "button",
                    role: "tab",
                    class: tab_class(index == active),
                    aria_selected: "{index == active}",
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tabs__trigger tabs__trigger--active"
    } else {
        "tabs__trigger"
    }
}
