//! Speech synthesis boundary.
//!
//! The core does not produce audio. A speech backend implements
//! [`Synthesizer`] and receives a validated [`SpeechRequest`] carrying the
//! analyzed text verbatim, a language from the fixed [`Language`] menu and a
//! slow-speech flag.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{SpeechError, SpeechResult};

/// Languages a speech backend is asked to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// Bulgarian.
    Bg,
    /// English.
    En,
    /// German.
    De,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// Italian.
    It,
    /// Russian.
    Ru,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Bg,
        Self::En,
        Self::De,
        Self::Fr,
        Self::Es,
        Self::It,
        Self::Ru,
    ];

    /// Returns the language tag passed to the backend.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::It => "it",
            Self::Ru => "ru",
        }
    }

    /// Returns the language name in that language.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Bg => "Български",
            Self::En => "English",
            Self::De => "Deutsch",
            Self::Fr => "Français",
            Self::Es => "Español",
            Self::It => "Italiano",
            Self::Ru => "Русский",
        }
    }

    /// Comma-separated list of supported tags.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SpeechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == tag)
            .ok_or_else(|| SpeechError::UnsupportedLanguage {
                tag: s.to_string(),
                available: Self::available(),
            })
    }
}

/// A request to read text aloud.
///
/// Deserialization goes through [`SpeechRequest::new`], so blank text is
/// rejected there too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawSpeechRequest")]
pub struct SpeechRequest {
    text: String,
    language: Language,
    slow: bool,
}

#[derive(Deserialize, JsonSchema)]
struct RawSpeechRequest {
    text: String,
    language: Language,
    #[serde(default)]
    slow: bool,
}

impl TryFrom<RawSpeechRequest> for SpeechRequest {
    type Error = SpeechError;

    fn try_from(raw: RawSpeechRequest) -> Result<Self, Self::Error> {
        Self::new(raw.text, raw.language, raw.slow)
    }
}

impl SpeechRequest {
    /// Build a request, rejecting blank text.
    ///
    /// The text is kept exactly as given.
    pub fn new(text: impl Into<String>, language: Language, slow: bool) -> SpeechResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        Ok(Self {
            text,
            language,
            slow,
        })
    }

    /// Text to synthesize.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Target language.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Whether the backend should speak slowly.
    pub const fn slow(&self) -> bool {
        self.slow
    }
}

/// A speech backend turning text into encoded audio.
pub trait Synthesizer {
    /// Synthesize the request, returning the encoded audio bytes.
    fn synthesize(&self, request: &SpeechRequest) -> SpeechResult<Vec<u8>>;
}
