//! # Sentiment Core
//!
//! `sentiment_core` holds the pieces every MoodOwl pipeline shares: the
//! polarity score type, the sentiment categories, the two classification
//! policies and the scorer backends.
//!
//! ## Classification Policies
//!
//! Scores are mapped to categories by one of two fixed policies:
//!
//! - **Five-band** ([`FiveBandPolicy`]): used for text annotation, with separate
//!   colors for strong and weak sentiment
//! - **Three-band** ([`ThreeBandPolicy`]): used for headline batches, one color
//!   per category
//!
//! ## Usage Example
//!
//! ```
//! use sentiment_core::{Category, ClassificationPolicy, FiveBandPolicy, PolarityScore, TextColor};
//!
//! let score = PolarityScore::new(0.62).unwrap();
//! let (category, color) = FiveBandPolicy.classify(score);
//!
//! assert_eq!(category, Category::Positive);
//! assert_eq!(color, TextColor::StrongPositive);
//! assert_eq!(color.code(), "#8ef");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod classify;
pub mod config;
pub mod logging;
// Deterministic scorers for tests and demos
pub mod mock_scorers;
pub mod scorer;

pub use classify::{ClassificationPolicy, FiveBandPolicy, HeadlineColor, TextColor, ThreeBandPolicy};
pub use config::EngineConfig;
pub use scorer::{score_or_neutral, PolarityScorer, VaderScorer};

/// Errors that can occur while scoring or configuring the engine
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Scoring failed: {0}")]
    ScoringFailed(String),

    #[error("Invalid score: {0}")]
    InvalidScore(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sentiment operations
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Compound sentiment intensity in `[-1.0, 1.0]`
///
/// More negative means more negative sentiment. Values are never mutated
/// once computed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PolarityScore(f64);

impl PolarityScore {
    /// Score assigned to text with no detectable sentiment
    pub const NEUTRAL: PolarityScore = PolarityScore(0.0);

    /// Create a score, clamping into `[-1.0, 1.0]`
    ///
    /// Returns an error for NaN.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(SentimentError::InvalidScore(
                "score must be a number".to_string(),
            ));
        }
        Ok(Self(value.clamp(-1.0, 1.0)))
    }

    /// The raw score
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PolarityScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for PolarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Discrete sentiment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    /// Display name, one of `"Positive"`, `"Neutral"` or `"Negative"`
    pub fn name(self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Neutral => "Neutral",
            Category::Negative => "Negative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit size used to split text before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Whitespace separated words, punctuation left attached
    Word,
    /// Sentences ending in `.`, `?` or `!`
    Sentence,
    /// Non-blank lines
    Paragraph,
}

impl Granularity {
    /// All granularities in display order
    pub const ALL: [Granularity; 3] = [
        Granularity::Word,
        Granularity::Sentence,
        Granularity::Paragraph,
    ];

    /// Section title used by renderers
    pub fn label(self) -> &'static str {
        match self {
            Granularity::Word => "Word-level",
            Granularity::Sentence => "Sentence-level",
            Granularity::Paragraph => "Paragraph-level",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Word => write!(f, "word"),
            Granularity::Sentence => write!(f, "sentence"),
            Granularity::Paragraph => write!(f, "paragraph"),
        }
    }
}

impl FromStr for Granularity {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" | "words" => Ok(Granularity::Word),
            "sentence" | "sentences" => Ok(Granularity::Sentence),
            "paragraph" | "paragraphs" => Ok(Granularity::Paragraph),
            other => Err(SentimentError::InvalidConfig(format!(
                "unknown granularity '{}'",
                other
            ))),
        }
    }
}
