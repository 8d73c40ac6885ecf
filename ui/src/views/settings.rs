use dioxus::prelude::*;

use crate::components::widgets::{Card, Switch};
use crate::components::{Icon, IconKind};
use crate::core::disclosure::{is_open, toggle_single};
use crate::core::format::{capitalize, format_px};
use crate::i18n::{self, ActiveLocale};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Account,
    Appearance,
    Notifications,
    Privacy,
    Language,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 5] = [
        SettingsSection::Account,
        SettingsSection::Appearance,
        SettingsSection::Notifications,
        SettingsSection::Privacy,
        SettingsSection::Language,
    ];

    fn icon(self) -> IconKind {
        match self {
            SettingsSection::Account => IconKind::User,
            SettingsSection::Appearance => IconKind::Sun,
            SettingsSection::Notifications => IconKind::Bell,
            SettingsSection::Privacy => IconKind::Lock,
            SettingsSection::Language => IconKind::Globe,
        }
    }

    fn title(self) -> String {
        match self {
            SettingsSection::Account => t!("settings-account"),
            SettingsSection::Appearance => t!("settings-appearance"),
            SettingsSection::Notifications => t!("settings-notifications"),
            SettingsSection::Privacy => t!("settings-privacy"),
            SettingsSection::Language => t!("settings-language"),
        }
    }

    fn id(self) -> &'static str {
        match self {
            SettingsSection::Account => "account",
            SettingsSection::Appearance => "appearance",
            SettingsSection::Notifications => "notifications",
            SettingsSection::Privacy => "privacy",
            SettingsSection::Language => "language",
        }
    }
}

pub const FONT_SIZE_MIN: u32 = 12;
pub const FONT_SIZE_MAX: u32 = 24;
pub const FONT_SIZE_DEFAULT: u32 = 16;

const ACCENT_COLORS: [&str; 4] = ["blue", "green", "red", "purple"];
const NOTIFICATION_CHANNELS: [&str; 3] = ["email", "push", "in-app"];

/// Slider input parsed and clamped to the allowed range.
fn parse_font_size(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| (v.round() as i64).clamp(FONT_SIZE_MIN as i64, FONT_SIZE_MAX as i64) as u32)
}

#[component]
pub fn Settings(dark_mode: bool) -> Element {
    let mut open = use_signal(|| Option::<SettingsSection>::None);
    let theme_class = if dark_mode { "dark" } else { "" };

    rsx! {
        section { class: "page page-settings {theme_class}",
            Card { class: "settings",
                div { class: "accordion",
                    for section in SettingsSection::ALL {
                        div {
                            key: "{section.id()}",
                            class: item_class(is_open(&open(), &section)),
                            button {
                                r#type: "button",
                                class: "accordion__trigger",
                                aria_expanded: "{is_open(&open(), &section)}",
                                onclick: move |_| {
                                    let next = toggle_single(open(), section);
                                    open.set(next);
                                },
                                span { class: "accordion__title",
                                    Icon { kind: section.icon() }
                                    {section.title()}
                                }
                                Icon {
                                    kind: IconKind::ChevronDown,
                                    class: "accordion__chevron",
                                }
                            }
                            if is_open(&open(), &section) {
                                div { class: "accordion__content",
                                    {section_body(section)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(crate) fn item_class(open: bool) -> &'static str {
    if open {
        "accordion__item accordion__item--open"
    } else {
        "accordion__item"
    }
}

fn section_body(section: SettingsSection) -> Element {
    match section {
        SettingsSection::Account => rsx! { AccountSettings {} },
        SettingsSection::Appearance => rsx! { AppearanceSettings {} },
        SettingsSection::Notifications => rsx! { NotificationSettings {} },
        SettingsSection::Privacy => rsx! { PrivacySettings {} },
        SettingsSection::Language => rsx! { LanguageSettings {} },
    }
}

#[component]
fn AccountSettings() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    rsx! {
        div { class: "settings__account",
            div { class: "form-grid",
                div { class: "field",
                    label { r#for: "settings-name", {t!("field-name")} }
                    input {
                        id: "settings-name",
                        class: "input",
                        placeholder: "John Doe",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "settings-email", {t!("field-email")} }
                    input {
                        id: "settings-email",
                        class: "input",
                        r#type: "email",
                        placeholder: "john@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| tracing::info!(name = %name(), email = %email(), "account update requested"),
                {t!("settings-update-account")}
            }
        }
    }
}

#[component]
fn AppearanceSettings() -> Element {
    let mut accent = use_signal(|| "blue");
    let mut font_size = use_signal(|| FONT_SIZE_DEFAULT);

    rsx! {
        div { class: "settings__appearance",
            div { class: "field",
                span { class: "field__label", {t!("settings-theme-color")} }
                div { class: "swatches", role: "radiogroup",
                    for color in ACCENT_COLORS {
                        button {
                            key: "{color}",
                            r#type: "button",
                            role: "radio",
                            class: "swatch swatch--{color}",
                            aria_checked: "{accent() == color}",
                            title: "{capitalize(color)}",
                            onclick: move |_| accent.set(color),
                        }
                    }
                }
            }
            div { class: "field",
                label { r#for: "font-size", class: "field__label", {t!("settings-font-size")} }
                div { class: "slider",
                    input {
                        id: "font-size",
                        r#type: "range",
                        min: "{FONT_SIZE_MIN}",
                        max: "{FONT_SIZE_MAX}",
                        step: "1",
                        value: "{font_size}",
                        oninput: move |evt| {
                            if let Some(size) = parse_font_size(&evt.value()) {
                                font_size.set(size);
                            }
                        },
                    }
                    span { class: "slider__value", "{format_px(font_size())}" }
                }
            }
        }
    }
}

#[component]
fn NotificationSettings() -> Element {
    let mut enabled = use_signal(|| [false; NOTIFICATION_CHANNELS.len()]);

    rsx! {
        div { class: "settings__notifications",
            for (index, channel) in NOTIFICATION_CHANNELS.into_iter().enumerate() {
                div { key: "{channel}", class: "setting-row",
                    label { r#for: "{channel}-notifications", {notification_label(channel)} }
                    Switch {
                        id: "{channel}-notifications",
                        checked: enabled()[index],
                        on_toggle: move |on| enabled.with_mut(|flags| flags[index] = on),
                    }
                }
            }
        }
    }
}

fn notification_label(channel: &str) -> String {
    match channel {
        "email" => t!("settings-notify-email"),
        "push" => t!("settings-notify-push"),
        _ => t!("settings-notify-in-app"),
    }
}

#[component]
fn PrivacySettings() -> Element {
    let mut visibility = use_signal(String::new);
    let mut data_sharing = use_signal(|| false);
    let mut two_factor = use_signal(|| false);

    rsx! {
        div { class: "settings__privacy",
            div { class: "setting-row",
                label { r#for: "profile-visibility", {t!("settings-profile-visibility")} }
                select {
                    id: "profile-visibility",
                    class: "select",
                    value: "{visibility}",
                    onchange: move |evt| visibility.set(evt.value()),
                    option { value: "", disabled: true, {t!("settings-visibility-placeholder")} }
                    option { value: "public", {t!("settings-visibility-public")} }
                    option { value: "private", {t!("settings-visibility-private")} }
                    option { value: "friends", {t!("settings-visibility-friends")} }
                }
            }
            div { class: "setting-row",
                label { r#for: "data-sharing", {t!("settings-data-sharing")} }
                Switch {
                    id: "data-sharing",
                    checked: data_sharing(),
                    on_toggle: move |on| data_sharing.set(on),
                }
            }
            div { class: "setting-row",
                label { r#for: "two-factor", {t!("settings-two-factor")} }
                Switch {
                    id: "two-factor",
                    checked: two_factor(),
                    on_toggle: move |on| two_factor.set(on),
                }
            }
        }
    }
}

#[component]
fn LanguageSettings() -> Element {
    let locale = try_use_context::<ActiveLocale>();
    let current = locale
        .map(|l| l.code())
        .unwrap_or_else(i18n::current_language);
    let languages = i18n::available_languages();

    rsx! {
        div { class: "settings__language",
            div { class: "field",
                label { r#for: "language-select", class: "field__label", {t!("settings-select-language")} }
                select {
                    id: "language-select",
                    class: "select",
                    value: "{current}",
                    onchange: move |evt| {
                        let tag = evt.value();
                        match locale {
                            Some(active) => active.switch(&tag),
                            None => {
                                if let Err(err) = i18n::set_language(&tag) {
                                    tracing::warn!(%err, lang = %tag, "language switch failed");
                                }
                            }
                        }
                    },
                    for tag in languages {
                        option { key: "{tag}", value: "{tag}", "{i18n::language_name(&tag)}" }
                    }
                }
            }
            p { class: "settings__hint",
                Icon { kind: IconKind::CircleHelp }
                {t!("settings-language-hint")}
            }
        }
    }
}
