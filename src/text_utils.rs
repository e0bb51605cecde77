//! Text splitting helpers for word-level reveal.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid word regex"));

/// Split text into whitespace-separated words, preserving source order.
pub fn split_words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_words;

    #[test]
    fn keeps_order_and_punctuation() {
        assert_eq!(
            split_words("  Lead  engineering, then ship.\n Again "),
            vec!["Lead", "engineering,", "then", "ship.", "Again"]
        );
    }

    #[test]
    fn blank_text_has_no_words() {
        assert!(split_words(" \t\n").is_empty());
    }
}
