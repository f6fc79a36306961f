//! Word frequency ranking.

use std::collections::HashMap;

use crate::config::WordCase;

use super::reports::{WordFrequency, round1};

/// Rank distinct words by occurrence count, most common first.
///
/// Words with equal counts keep the order in which they first appear. With
/// [`WordCase::Insensitive`], "Дом" and "дом" are one entry displayed in the
/// form seen first.
#[tracing::instrument(skip_all, fields(words = words.len(), case = ?case))]
pub fn rank_words(words: &[&str], case: WordCase) -> Vec<WordFrequency> {
    if words.is_empty() {
        return Vec::new();
    }

    let total = words.len() as f64;
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for &word in words {
        let slot = *slots.entry(case.key(word)).or_insert_with(|| {
            counts.push((word, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
            percentage: round1(count as f64 / total * 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_common_first() {
        let ranked = rank_words(&["a", "a", "b"], WordCase::Insensitive);
        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].word.as_str(), ranked[0].count), ("a", 2));
        assert_eq!((ranked[1].word.as_str(), ranked[1].count), ("b", 1));
        assert_eq!(ranked[0].percentage, 66.7);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = rank_words(&["в", "б", "а", "б", "в", "а"], WordCase::Sensitive);
        let words: Vec<_> = ranked.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["в", "б", "а"]);
    }

    #[test]
    fn insensitive_merges_case_and_keeps_first_form() {
        let ranked = rank_words(&["Дом", "дом", "ДОМ", "път"], WordCase::Insensitive);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word, "Дом");
        assert_eq!(ranked[0].count, 3);
    }

    #[test]
    fn sensitive_keeps_forms_apart() {
        let ranked = rank_words(&["Дом", "дом"], WordCase::Sensitive);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|w| w.count == 1));
    }

    #[test]
    fn empty_words() {
        assert!(rank_words(&[], WordCase::Insensitive).is_empty());
    }
}
