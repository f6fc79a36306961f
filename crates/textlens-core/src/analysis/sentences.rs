//! Per-sentence statistics and their aggregates.

use crate::text;

use super::category::LengthCategory;
use super::reports::{LengthDistribution, SentenceReport, SentenceStats};

/// Build the report for one sentence.
///
/// `number` is the 1-based position; `words` is the sentence's word count.
pub fn analyze_sentence(sentence: &str, number: usize, words: usize) -> SentenceReport {
    SentenceReport {
        number,
        text: sentence.to_string(),
        words,
        characters: text::char_count(sentence),
        characters_no_spaces: text::char_count_without_spaces(sentence),
        length_category: LengthCategory::from_word_count(words),
    }
}

/// Aggregate sentence statistics.
///
/// Every field is zero when there are no sentences.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn sentence_stats(sentences: &[SentenceReport]) -> SentenceStats {
    let Some(first) = sentences.first() else {
        return SentenceStats::default();
    };

    let count = sentences.len();
    let mut total_words = 0usize;
    let mut total_chars = 0usize;
    let mut min_words = first.words;
    let mut max_words = first.words;
    let mut min_chars = first.characters;
    let mut max_chars = first.characters;
    let mut shortest = first.number;
    let mut longest = first.number;
    let mut distribution = LengthDistribution::default();

    for s in sentences {
        total_words += s.words;
        total_chars += s.characters;
        min_chars = min_chars.min(s.characters);
        max_chars = max_chars.max(s.characters);
        // Strict comparisons: ties keep the earlier sentence.
        if s.words < min_words {
            min_words = s.words;
            shortest = s.number;
        }
        if s.words > max_words {
            max_words = s.words;
            longest = s.number;
        }
        distribution.record(s.length_category);
    }

    SentenceStats {
        count,
        avg_words_per_sentence: total_words as f64 / count as f64,
        avg_chars_per_sentence: total_chars as f64 / count as f64,
        min_words,
        max_words,
        min_chars,
        max_chars,
        distribution,
        shortest_sentence: Some(shortest),
        longest_sentence: Some(longest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(number: usize, text: &str) -> SentenceReport {
        let words = text::extract_words(text).len();
        analyze_sentence(text, number, words)
    }

    #[test]
    fn single_sentence_report() {
        let r = report(1, "Това е първото изречение.");
        assert_eq!(r.number, 1);
        assert_eq!(r.words, 4);
        assert_eq!(r.characters, 25);
        assert_eq!(r.characters_no_spaces, 22);
        assert_eq!(r.length_category, LengthCategory::Short);
    }

    #[test]
    fn empty_stats_are_zero() {
        let stats = sentence_stats(&[]);
        assert_eq!(stats, SentenceStats::default());
        assert_eq!(stats.avg_words_per_sentence, 0.0);
        assert!(stats.shortest_sentence.is_none());
    }

    #[test]
    fn aggregates_over_sentences() {
        let sentences = vec![
            report(1, "Едно две."),
            report(2, "Едно две три четири пет шест седем осем девет десет."),
            report(3, "Едно."),
        ];
        let stats = sentence_stats(&sentences);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min_words, 1);
        assert_eq!(stats.max_words, 10);
        assert!((stats.avg_words_per_sentence - 13.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.shortest_sentence, Some(3));
        assert_eq!(stats.longest_sentence, Some(2));
        assert_eq!(stats.distribution.short, 2);
        assert_eq!(stats.distribution.medium, 1);
        assert_eq!(stats.distribution.long, 0);
        assert_eq!(stats.min_chars, 5);
    }

    #[test]
    fn ties_pick_first_sentence() {
        let sentences = vec![report(1, "А б."), report(2, "В г.")];
        let stats = sentence_stats(&sentences);
        assert_eq!(stats.shortest_sentence, Some(1));
        assert_eq!(stats.longest_sentence, Some(1));
    }
}
