//! Selection rules for tabs and single-collapsible accordions.
//!
//! Tabs always have exactly one active entry, so a plain `Signal<T>` is
//! enough for them. Accordions allow zero or one open item; clicking the
//! open item closes it, clicking another moves the selection.

/// Next open item after `clicked` is activated.
pub fn toggle_single<T: PartialEq>(open: Option<T>, clicked: T) -> Option<T> {
    match open {
        Some(current) if current == clicked => None,
        _ => Some(clicked),
    }
}

pub fn is_open<T: PartialEq>(open: &Option<T>, item: &T) -> bool {
    open.as_ref() == Some(item)
}

/// Items from `all` currently shown expanded.
pub fn expanded<'a, T: PartialEq>(all: &'a [T], open: &Option<T>) -> Vec<&'a T> {
    all.iter().filter(|item| is_open(open, item)).collect()
}
