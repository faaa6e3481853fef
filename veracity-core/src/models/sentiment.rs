//! Sentiment analyzer output: polarity label plus confidence.
//!
//! # Examples
//!
//! ```
//! use veracity_core::models::sentiment::{SentimentLabel, SentimentResult};
//!
//! let result = SentimentResult::new(SentimentLabel::Positive, 0.97);
//! assert!(result.label.is_polar());
//! assert!((0.0..=1.0).contains(&result.score));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Polarity label emitted by the sentiment analyzer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
    /// Analyzer failure mapped to a safe value upstream.
    Error,
    /// Label vocabulary this system does not recognize.
    Unknown,
}

impl SentimentLabel {
    /// Whether the label carries polarity (positive or negative).
    pub fn is_polar(self) -> bool {
        matches!(self, Self::Positive | Self::Negative)
    }

    /// The lowercase wire form of the label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = std::convert::Infallible;

    /// Parse an analyzer label, case-insensitively. Anything outside the
    /// known vocabulary becomes [`SentimentLabel::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            "error" => Self::Error,
            _ => Self::Unknown,
        })
    }
}

/// Result of sentiment classification for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Analyzer confidence in [0.0, 1.0]. A confidence, not a polarity
    /// magnitude.
    pub score: f64,
}

impl SentimentResult {
    /// Create a result, clamping the confidence to [0.0, 1.0].
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self {
            label,
            score: score.clamp(0.0, 1.0),
        }
    }

    /// The safe default substituted for empty or malformed input.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }

    /// The sentinel an analyzer failure must be mapped to before the result
    /// reaches the scorer.
    pub fn analyzer_error() -> Self {
        Self {
            label: SentimentLabel::Error,
            score: 0.0,
        }
    }
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::neutral()
    }
}
