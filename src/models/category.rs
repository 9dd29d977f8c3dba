//! Category labels
//!
//! Categories are free-text labels. They are normalized to title case so that
//! "dining", "Dining" and " DINING " group together and share a budget.

/// Normalize a category label: trim, collapse inner whitespace, title case
/// each word.
pub fn normalize_category(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
