use std::collections::BTreeSet;

const EN_US: &str = include_str!("../i18n/en-US/shellboard_ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/shellboard_ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/shellboard_ui.ftl");

/// `(key, value)` for each message line; comments and blank lines skipped.
fn messages(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
        .collect()
}

fn check_locale(name: &str, src: &str, fallback: &BTreeSet<&str>) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = BTreeSet::new();
    for (key, value) in messages(src) {
        if !seen.insert(key) {
            problems.push(format!("{name}: duplicate `{key}`"));
        }
        if value.is_empty() {
            problems.push(format!("{name}: `{key}` is empty"));
        }
    }
    for key in fallback.difference(&seen) {
        problems.push(format!("{name}: missing `{key}`"));
    }
    problems
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback: BTreeSet<&str> = messages(EN_US).into_iter().map(|(k, _)| k).collect();
    assert!(fallback.contains("nav-home"));
    assert!(fallback.contains("contact-submitted"));

    let mut problems = check_locale("en-US", EN_US, &fallback);
    problems.extend(check_locale("es-ES", ES_ES, &fallback));
    problems.extend(check_locale("fr-FR", FR_FR, &fallback));

    assert!(problems.is_empty(), "translation problems:\n  {}", problems.join("\n  "));
}

#[test]
fn fallback_navigation_labels_are_english() {
    let nav: Vec<_> = messages(EN_US)
        .into_iter()
        .filter(|(k, _)| k.starts_with("nav-"))
        .collect();
    assert_eq!(
        nav,
        [
            ("nav-home", "Home"),
            ("nav-contact", "Contact"),
            ("nav-about", "About"),
            ("nav-settings", "Settings"),
            ("nav-profile", "Profile"),
        ]
    );
}
