//! Core library for textlens.
//!
//! Splits text into sentences and derives live statistics from it: per-sentence
//! word and character counts with a short/medium/long category, sentence
//! aggregates, a word-frequency table and a reading time estimate. Tuned for
//! Bulgarian (Cyrillic) prose; works on any Unicode text.
//!
//! # Modules
//!
//! - [`segment`] - Sentence segmentation with abbreviation handling
//! - [`text`] - Word extraction and character counting
//! - [`analysis`] - The statistics pipeline and its report types
//! - [`speech`] - Boundary for text-to-speech backends
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textlens_core::{analyze, split_sentences};
//!
//! let sentences = split_sentences("Срещнах проф. Иванов. Той е тук!");
//! assert_eq!(sentences, vec!["Срещнах проф. Иванов.", "Той е тук!"]);
//!
//! let report = analyze("Срещнах проф. Иванов. Той е тук!");
//! assert_eq!(report.total_words, 6);
//! assert_eq!(report.sentence_stats.count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod segment;
pub mod speech;
pub mod text;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use analysis::{
    AnalysisOptions, AnalysisReport, LengthCategory, LengthDistribution, SentenceReport,
    SentenceStats, WordFrequency, analyze, analyze_with,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, WordCase};
pub use error::{ConfigError, ConfigResult, SpeechError, SpeechResult};
pub use segment::split_sentences;
pub use speech::{Language, SpeechRequest, Synthesizer};
