//! Text statistics.
//!
//! [`analyze`] runs the whole pipeline: segment the text, extract words per
//! sentence, then derive per-sentence, sentence-aggregate and document-wide
//! statistics. The pipeline holds no state between calls, so callers can
//! re-run it on every change of the input buffer.
//!
//! Each step is a pure function in its own module and can be used on its own.

pub mod category;
pub mod frequency;
pub mod reports;
pub mod sentences;

pub use category::LengthCategory;
pub use reports::{AnalysisReport, LengthDistribution, SentenceReport, SentenceStats, WordFrequency};

use crate::config::{Config, WordCase};
use crate::segment;
use crate::text;

/// Number of entries kept in the word-frequency table by default.
pub const DEFAULT_TOP_WORDS: usize = 15;

/// Assumed reading speed, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 200.0;

/// Knobs for [`analyze_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// How many entries to keep in the word-frequency table.
    pub top_words: usize,
    /// Reading speed used for the reading time estimate.
    ///
    /// Non-positive or non-finite values fall back to
    /// [`DEFAULT_WORDS_PER_MINUTE`].
    pub words_per_minute: f64,
    /// Whether word counting folds case.
    pub word_case: WordCase,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            word_case: WordCase::default(),
        }
    }
}

impl AnalysisOptions {
    /// Options from loaded configuration, defaults for anything unset.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            top_words: config.top_words.unwrap_or(defaults.top_words),
            words_per_minute: config
                .words_per_minute
                .unwrap_or(defaults.words_per_minute),
            word_case: config.word_case.unwrap_or(defaults.word_case),
        }
    }

    /// Reading speed actually used: [`DEFAULT_WORDS_PER_MINUTE`] when the
    /// configured rate is non-positive or non-finite.
    pub fn reading_rate(&self) -> f64 {
        if self.words_per_minute.is_finite() && self.words_per_minute > 0.0 {
            self.words_per_minute
        } else {
            DEFAULT_WORDS_PER_MINUTE
        }
    }
}

/// Analyze text with default options.
///
/// Blank input returns the empty report ([`AnalysisReport::default`]).
pub fn analyze(text: &str) -> AnalysisReport {
    analyze_with(text, &AnalysisOptions::default())
}

/// Analyze text.
///
/// Never fails: blank input returns the empty report and every average or
/// ratio is zero when its denominator would be.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze_with(input: &str, options: &AnalysisOptions) -> AnalysisReport {
    if input.trim().is_empty() {
        return AnalysisReport::default();
    }

    let sentence_texts = segment::split_sentences(input);

    let mut per_sentence = Vec::with_capacity(sentence_texts.len());
    let mut all_words: Vec<&str> = Vec::new();
    for (idx, sentence) in sentence_texts.iter().enumerate() {
        let words = text::extract_words(sentence);
        per_sentence.push(sentences::analyze_sentence(sentence, idx + 1, words.len()));
        all_words.extend(words);
    }

    let total_words = all_words.len();
    let avg_word_length = if total_words > 0 {
        let letters: usize = all_words.iter().map(|w| text::char_count(w)).sum();
        letters as f64 / total_words as f64
    } else {
        0.0
    };

    let mut common_words = frequency::rank_words(&all_words, options.word_case);
    let unique_words = common_words.len();
    common_words.truncate(options.top_words);

    let sentence_stats = sentences::sentence_stats(&per_sentence);

    tracing::debug!(
        sentences = per_sentence.len(),
        total_words,
        unique_words,
        "text analyzed"
    );

    AnalysisReport {
        sentences: per_sentence,
        sentence_stats,
        total_words,
        unique_words,
        avg_word_length,
        total_characters: text::char_count(input),
        total_characters_no_spaces: text::char_count_without_spaces(input),
        reading_time_minutes: total_words as f64 / options.reading_rate(),
        common_words,
    }
}
