#![cfg(test)]
//! The desktop binary inlines the shared theme and the shell stylesheet in
//! release builds. A broken path or truncated file would only show up as
//! unstyled windows at runtime, so check both here.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const SHELL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/shell.css"
));

#[test]
fn embedded_stylesheets_are_not_empty() {
    assert!(!THEME_CSS.trim().is_empty(), "theme stylesheet is empty");
    assert!(!SHELL_CSS.trim().is_empty(), "shell stylesheet is empty");
}

#[test]
fn theme_defines_light_and_dark_tokens() {
    for token in ["--color-bg", "--color-text", "--color-surface"] {
        let definitions = THEME_CSS.matches(&format!("{token}:")).count();
        assert!(
            definitions >= 2,
            "`{token}` should be set for both light and dark ({definitions} found)"
        );
    }
    assert!(THEME_CSS.contains("html.dark"));
}

#[test]
fn small_viewports_hide_the_sidebar_until_opened() {
    let media = SHELL_CSS
        .split("@media (max-width: 720px)")
        .nth(1)
        .expect("shell stylesheet has a small-viewport block");
    assert!(media.contains(".sidebar {"));
    assert!(media.contains("display: none"));
    assert!(media.contains(".sidebar--open"));
}
