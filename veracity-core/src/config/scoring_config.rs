//! Configuration for trust scoring.
//!
//! # Examples
//!
//! ```
//! use veracity_core::config::ScoringConfig;
//!
//! let config = ScoringConfig::default();
//! assert_eq!(config.sentiment_penalty, 10);
//! assert!((config.sentiment_confidence_threshold - 0.9).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

/// Weights for the trust-score adjustments. All penalty and bonus fields are
/// positive magnitudes; the scorer applies the sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Penalty when a polar label exceeds the confidence threshold. Default: 10.
    pub sentiment_penalty: i64,
    /// Confidence a polar label must strictly exceed to be penalized. Default: 0.9.
    pub sentiment_confidence_threshold: f64,
    /// Penalty per compliance issue, uncapped. Default: 10.
    pub compliance_issue_penalty: i64,
    /// Penalty when fact verification failed. Default: 20.
    pub fact_check_penalty: i64,
    /// Bonus when fact verification succeeded. Default: 5.
    pub fact_verified_bonus: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sentiment_penalty: 10,
            sentiment_confidence_threshold: 0.9,
            compliance_issue_penalty: 10,
            fact_check_penalty: 20,
            fact_verified_bonus: 5,
        }
    }
}
