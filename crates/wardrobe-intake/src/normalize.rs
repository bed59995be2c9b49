//! Description normalization

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z ]").expect("valid regex"));
static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]").expect("valid regex"));

/// Normalize a description for storage
///
/// Drops every character other than ASCII letters and space, then
/// upper-cases the first letter of each word. Spacing is kept as is.
///
/// ```rust
/// use wardrobe_intake::normalize_description;
///
/// assert_eq!(normalize_description("Casual, cool! top 2"), "Casual Cool Top ");
/// ```
#[must_use]
pub fn normalize_description(text: &str) -> String {
    let letters = NON_LETTER.replace_all(text, "");
    WORD_START
        .replace_all(&letters, |caps: &Captures<'_>| caps[0].to_ascii_uppercase())
        .into_owned()
}

/// Cut typed input to `limit` characters
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_and_capitalizes() {
        assert_eq!(normalize_description("Casual, cool! top 2"), "Casual Cool Top ");
        assert_eq!(normalize_description("grandma's  knit"), "Grandmas  Knit");
        assert_eq!(normalize_description("123 !!"), " ");
        assert_eq!(normalize_description(""), "");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(normalize_description("café noir"), "Caf Noir");
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("ab", 4), "ab");
        assert_eq!(truncate_chars("ééééé", 2), "éé");
    }
}
