//! Abbreviation dictionary for sentence boundary detection.
//!
//! Bulgarian titles, ordinals and address abbreviations that almost never
//! end a sentence even though they are written with a trailing period
//! ("проф. Иванов", "ул. Витоша", "2024 г.").

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that should not trigger a sentence break, lowercase.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Year, century, volume ("г.", "с.", "т.")
    set.extend(["г", "с", "т"]);

    // Titles
    set.extend(["др", "проф", "доц", "инж"]);

    // Addresses: block, alley, street, boulevard, square
    set.extend(["бл", "ал", "ул", "бул", "пл"]);

    set
});

/// Check if a word is a known abbreviation.
///
/// Matching is case-insensitive and ignores surrounding periods.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    ABBREVIATIONS.contains(trimmed)
}

/// Check if a sentence ends with an abbreviation followed by a single period.
///
/// The abbreviation must be a whole token: the run of word characters
/// (letters, digits, `_`) right before the final period is compared, so
/// "ог." does not match "г".
pub fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(without_period) = sentence.strip_suffix('.') else {
        return false;
    };

    let token_start = without_period
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_token_char(c))
        .last()
        .map_or(without_period.len(), |(idx, _)| idx);

    let token = &without_period[token_start..];
    !token.is_empty() && is_abbreviation(token)
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
