//! Small formatting helpers for page content.

/// Avatar fallback: first character of each whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn format_px(value: u32) -> String {
    format!("{value}px")
}

/// `"account"` → `"Account"`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("  Cher "), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn capitalize_handles_empty_and_words() {
        assert_eq!(capitalize("appearance"), "Appearance");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn px_suffix() {
        assert_eq!(format_px(16), "16px");
    }
}
