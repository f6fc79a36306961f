//! Report structs for text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Reports are built by
//! [`analyze`](super::analyze) only; every count is derived from the text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::category::LengthCategory;

/// Full statistics for one document.
///
/// The default value is the empty report returned for blank input: no
/// sentences and every number zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Per-sentence statistics, in document order.
    pub sentences: Vec<SentenceReport>,
    /// Aggregates over all sentences.
    pub sentence_stats: SentenceStats,
    /// Number of words in the document.
    pub total_words: usize,
    /// Number of distinct word forms.
    pub unique_words: usize,
    /// Mean word length in characters.
    pub avg_word_length: f64,
    /// Characters in the raw input.
    pub total_characters: usize,
    /// Characters in the raw input, not counting spaces.
    pub total_characters_no_spaces: usize,
    /// Estimated reading time in minutes.
    pub reading_time_minutes: f64,
    /// Most frequent words, most common first.
    pub common_words: Vec<WordFrequency>,
}

impl AnalysisReport {
    /// True when the input had no usable content.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of sentences detected.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

// -- Sentences --------------------------------------------------------------

/// Statistics for a single sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceReport {
    /// Sentence number (1-indexed).
    pub number: usize,
    /// Sentence text, trimmed.
    pub text: String,
    /// Word count.
    pub words: usize,
    /// Character count.
    pub characters: usize,
    /// Character count without spaces.
    pub characters_no_spaces: usize,
    /// Length bucket derived from `words`.
    pub length_category: LengthCategory,
}

/// Aggregate sentence statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceStats {
    /// Number of sentences.
    pub count: usize,
    /// Mean words per sentence.
    pub avg_words_per_sentence: f64,
    /// Mean characters per sentence.
    pub avg_chars_per_sentence: f64,
    /// Fewest words in a sentence.
    pub min_words: usize,
    /// Most words in a sentence.
    pub max_words: usize,
    /// Fewest characters in a sentence.
    pub min_chars: usize,
    /// Most characters in a sentence.
    pub max_chars: usize,
    /// Sentence counts per length category.
    pub distribution: LengthDistribution,
    /// Number of the first sentence with the fewest words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_sentence: Option<usize>,
    /// Number of the first sentence with the most words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_sentence: Option<usize>,
}

/// How many sentences fall into each length category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LengthDistribution {
    /// Sentences with up to 8 words.
    pub short: usize,
    /// Sentences with 9 to 15 words.
    pub medium: usize,
    /// Sentences with more than 15 words.
    pub long: usize,
}

impl LengthDistribution {
    /// Total number of sentences counted.
    pub const fn total(&self) -> usize {
        self.short + self.medium + self.long
    }

    /// Count for one category.
    pub const fn count(&self, category: LengthCategory) -> usize {
        match category {
            LengthCategory::Short => self.short,
            LengthCategory::Medium => self.medium,
            LengthCategory::Long => self.long,
        }
    }

    /// Share of sentences in a category, as a percentage rounded to 0.1.
    ///
    /// Zero when no sentences were counted.
    pub fn percentage(&self, category: LengthCategory) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        round1(self.count(category) as f64 / total as f64 * 100.0)
    }

    pub(crate) const fn record(&mut self, category: LengthCategory) {
        match category {
            LengthCategory::Short => self.short += 1,
            LengthCategory::Medium => self.medium += 1,
            LengthCategory::Long => self.long += 1,
        }
    }
}

// -- Word frequency ---------------------------------------------------------

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordFrequency {
    /// The word as first written in the document.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
    /// Share of all words, as a percentage rounded to 0.1.
    pub percentage: f64,
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
