//! Every `t!` key used under `src/` must exist in the fallback locale, and
//! every locale folder must define the fallback's keys with the same
//! placeables.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "shellboard_ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message id -> sorted variable names referenced by its pattern.
fn parse_messages(content: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages = BTreeMap::new();
    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('-') {
            continue;
        }
        let Some((id, pattern)) = trimmed.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || !id.chars().all(is_key_char) {
            continue;
        }
        messages.insert(id.to_string(), variables(pattern));
    }
    messages
}

fn variables(pattern: &str) -> BTreeSet<String> {
    pattern
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| is_key_char(*c) || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn keys_used_in(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            keys_used_in(&path, found);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(\"").skip(1) {
            if let Some(key) = chunk.split('"').next() {
                if !key.is_empty() && key.chars().all(is_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
}

fn locale_dirs(root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn read_locale(root: &Path, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let path = root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    parse_messages(&content)
}

#[test]
fn source_keys_exist_in_fallback() {
    let root = crate_root();
    let fallback = read_locale(&root.join("i18n"), FALLBACK);
    assert!(!fallback.is_empty(), "fallback locale has no messages");

    let mut used = BTreeSet::new();
    keys_used_in(&root.join("src"), &mut used);
    assert!(used.contains("nav-home"));

    let missing: Vec<_> = used.iter().filter(|k| !fallback.contains_key(*k)).collect();
    assert!(missing.is_empty(), "keys missing from {FALLBACK}: {missing:?}");

    let unused: Vec<_> = fallback.keys().filter(|k| !used.contains(*k)).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback keys unused in sources: {unused:?}", unused.len());
    }
}

#[test]
fn every_locale_matches_fallback() {
    let i18n_root = crate_root().join("i18n");
    let fallback = read_locale(&i18n_root, FALLBACK);
    let locales = locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == FALLBACK));

    let mut report = Vec::new();
    for locale in locales.iter().filter(|l| *l != FALLBACK) {
        let messages = read_locale(&i18n_root, locale);
        for (key, vars) in &fallback {
            match messages.get(key) {
                None => report.push(format!("{locale}: missing `{key}`")),
                Some(found) if found != vars => report.push(format!(
                    "{locale}: `{key}` uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
    }
    assert!(report.is_empty(), "locale mismatches:\n  {}", report.join("\n  "));
}

#[test]
fn placeables_are_detected() {
    let parsed = parse_messages("a = Hi { $name }\n# b = nope\nc = plain\n");
    assert_eq!(parsed.len(), 2);
    assert!(parsed["a"].contains("name"));
    assert!(parsed["c"].is_empty());
}
