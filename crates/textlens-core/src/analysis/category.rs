//! Sentence length categories.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Length bucket of a sentence, derived from its word count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LengthCategory {
    /// Up to 8 words.
    Short,
    /// 9 to 15 words.
    Medium,
    /// More than 15 words.
    Long,
}

impl LengthCategory {
    /// Largest word count still considered short.
    pub const SHORT_MAX_WORDS: usize = 8;
    /// Largest word count still considered medium.
    pub const MEDIUM_MAX_WORDS: usize = 15;

    /// All categories, shortest first.
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Categorize a sentence by its word count.
    pub const fn from_word_count(words: usize) -> Self {
        if words <= Self::SHORT_MAX_WORDS {
            Self::Short
        } else if words <= Self::MEDIUM_MAX_WORDS {
            Self::Medium
        } else {
            Self::Long
        }
    }

    /// Machine-readable name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Human label shown next to a sentence (Bulgarian).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Short => "Късо",
            Self::Medium => "Средно",
            Self::Long => "Дълго",
        }
    }
}

impl std::fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
