//! Trust score and per-article trust assessment.
//!
//! # Examples
//!
//! ```
//! use veracity_core::models::trust::TrustScore;
//!
//! let score = TrustScore::new(130);
//! assert_eq!(score.value(), 100);
//! let score = TrustScore::new(-30);
//! assert_eq!(score.value(), 0);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Trust score clamped to [0, 100].
///
/// 100 means no penalties triggered; the clamp absorbs penalty overshoot in
/// either direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TrustScore(u8);

impl TrustScore {
    /// Upper bound of the scale.
    pub const MAX: i64 = 100;
    /// Scores at or above this read as trustworthy.
    pub const HIGH: u8 = 80;
    /// Scores below this read as questionable.
    pub const LOW: u8 = 40;

    /// Create from a raw (possibly overshooting) value, clamping to [0, 100].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX) as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Check whether the score is at or above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }

    /// Check whether the score is below the low threshold.
    pub fn is_low(self) -> bool {
        self.0 < Self::LOW
    }
}

impl Default for TrustScore {
    fn default() -> Self {
        Self(100)
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TrustScore {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<TrustScore> for u8 {
    fn from(score: TrustScore) -> Self {
        score.0
    }
}

/// Breakdown entry names used by the scorer.
pub mod breakdown_keys {
    pub const SENTIMENT_PENALTY: &str = "sentiment_penalty";
    pub const COMPLIANCE_PENALTY: &str = "compliance_penalty";
    pub const FACT_CHECK_PENALTY: &str = "fact_check_penalty";
    pub const FACT_VERIFIED_BONUS: &str = "fact_verified_bonus";
}

/// Per-article trust assessment: clamped score plus itemized adjustments.
///
/// Derived, never mutated in place; recomputed fresh per article from the
/// three analyzer results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustAssessment {
    pub trust_score: TrustScore,
    /// Signed contribution per adjustment name. Together with the base of
    /// 100 the values sum to the pre-clamp score; clamping is the last step
    /// and never appears as an entry.
    pub breakdown: BTreeMap<String, i64>,
}

impl TrustAssessment {
    /// Starting score before any adjustment.
    pub const BASE_SCORE: i64 = 100;

    /// The score before clamping: base plus every breakdown entry.
    pub fn pre_clamp_score(&self) -> i64 {
        Self::BASE_SCORE + self.breakdown.values().sum::<i64>()
    }
}
