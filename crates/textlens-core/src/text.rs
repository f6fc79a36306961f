//! Text processing utilities.
//!
//! Word extraction and character counting shared by the analyzer.

use regex::Regex;
use std::sync::LazyLock;

/// A word is a maximal run of Unicode letters or digits.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid regex"));

/// Extract words from text in document order.
///
/// Punctuation, whitespace and symbols separate words and are never part of
/// one, so "don't" yields `["don", "t"]` and "--" yields nothing.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count characters (Unicode scalar values).
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Count characters, ignoring U+0020 space characters.
///
/// Tabs and newlines still count.
pub fn char_count_without_spaces(text: &str) -> usize {
    text.chars().filter(|&c| c != ' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["Hello", "world", "This", "is", "a", "test"]);
    }

    #[test]
    fn extract_words_cyrillic_and_digits() {
        let words = extract_words("Иван купи 3 ябълки през 2024 г.");
        assert_eq!(words, vec!["Иван", "купи", "3", "ябълки", "през", "2024", "г"]);
    }

    #[test]
    fn extract_words_splits_on_apostrophes_and_hyphens() {
        assert_eq!(extract_words("don't"), vec!["don", "t"]);
        assert_eq!(extract_words("по-дълго"), vec!["по", "дълго"]);
    }

    #[test]
    fn punctuation_only_has_no_words() {
        assert!(extract_words("... -- !?").is_empty());
        assert!(extract_words("").is_empty());
    }

    #[test]
    fn char_counts() {
        assert_eq!(char_count("Здравей, свят"), 13);
        assert_eq!(char_count_without_spaces("Здравей, свят"), 12);
        assert_eq!(char_count_without_spaces("a\tb\nc d"), 6);
    }
}
