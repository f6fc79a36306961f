//! Error types for textlens-core.
//!
//! Text analysis itself never fails: blank input produces an empty report.
//! Errors only come from configuration loading and from the speech
//! collaborator boundary.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    MissingFile(Utf8PathBuf),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised at the speech synthesis boundary.
#[derive(Error, Debug)]
pub enum SpeechError {
    /// The text to synthesize is empty or whitespace-only.
    #[error("nothing to synthesize: text is blank")]
    EmptyText,

    /// The language tag is not on the supported menu.
    #[error("unsupported language: {tag}. Use: {available}")]
    UnsupportedLanguage {
        /// The tag that was requested.
        tag: String,
        /// Comma-separated list of supported tags.
        available: String,
    },

    /// The synthesis backend reported a failure.
    #[error("speech backend failed: {0}")]
    Backend(String),
}

/// Result type alias using [`SpeechError`].
pub type SpeechResult<T> = Result<T, SpeechError>;
