//! TrustScorer — combine one article's analyzer results into a bounded score.
//!
//! Additive model: start at 100, apply each signed adjustment, clamp last.
//! The breakdown records every adjustment by name, so the base of 100 plus
//! the breakdown values always equals the pre-clamp score.
//!
//! An article with extreme sentiment (confidence > 0.9), two compliance
//! issues and failed verification:
//! - sentiment_penalty: −10
//! - compliance_penalty: −20
//! - fact_check_penalty: −20
//! - final: 100 − 50 = 50

use std::collections::BTreeMap;

use tracing::debug;

use veracity_core::config::ScoringConfig;
use veracity_core::models::trust::breakdown_keys;
use veracity_core::models::{
    ComplianceResult, FactCheckResult, SentimentResult, TrustAssessment, TrustScore,
};

use crate::normalize;

/// Computes per-article trust assessments.
///
/// Holds only weights; every call is independent and allocates only local
/// state, so a single scorer can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct TrustScorer {
    config: ScoringConfig,
}

impl TrustScorer {
    /// Create a scorer with the default weights.
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    /// Create a scorer with explicit weights.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Get the config.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one article from its three analyzer results.
    ///
    /// Total over its input domain: no I/O, never panics, never errors.
    /// Malformed upstream payloads are the normalization layer's problem
    /// ([`score_values`](Self::score_values)), not this function's.
    ///
    /// # Examples
    ///
    /// ```
    /// use veracity_core::models::{ComplianceResult, FactCheckResult, SentimentResult};
    /// use veracity_scoring::TrustScorer;
    ///
    /// let scorer = TrustScorer::new();
    /// let assessment = scorer.score(
    ///     &SentimentResult::neutral(),
    ///     &ComplianceResult::clean(),
    ///     &FactCheckResult::default(),
    /// );
    /// // No penalties, verification bonus applies.
    /// assert_eq!(assessment.trust_score.value(), 100);
    /// assert_eq!(assessment.pre_clamp_score(), 105);
    /// ```
    pub fn score(
        &self,
        sentiment: &SentimentResult,
        compliance: &ComplianceResult,
        fact_check: &FactCheckResult,
    ) -> TrustAssessment {
        debug!(
            label = %sentiment.label,
            confidence = sentiment.score,
            compliant = compliance.compliant,
            issues = compliance.issues.len(),
            verified = fact_check.verified,
            "scoring article"
        );

        let mut score = TrustAssessment::BASE_SCORE;
        let mut breakdown = BTreeMap::new();

        // Extreme polarity at high confidence reads as strong framing.
        if sentiment.label.is_polar()
            && sentiment.score > self.config.sentiment_confidence_threshold
        {
            score -= self.config.sentiment_penalty;
            breakdown.insert(
                breakdown_keys::SENTIMENT_PENALTY.to_string(),
                -self.config.sentiment_penalty,
            );
        }

        // Flat per-issue penalty, uncapped.
        if !compliance.compliant {
            let penalty = self.config.compliance_issue_penalty * compliance.issues.len() as i64;
            score -= penalty;
            breakdown.insert(breakdown_keys::COMPLIANCE_PENALTY.to_string(), -penalty);
        }

        // Exactly one of the two fact-check branches applies.
        if !fact_check.verified {
            score -= self.config.fact_check_penalty;
            breakdown.insert(
                breakdown_keys::FACT_CHECK_PENALTY.to_string(),
                -self.config.fact_check_penalty,
            );
        } else {
            score += self.config.fact_verified_bonus;
            breakdown.insert(
                breakdown_keys::FACT_VERIFIED_BONUS.to_string(),
                self.config.fact_verified_bonus,
            );
        }

        TrustAssessment {
            trust_score: TrustScore::new(score),
            breakdown,
        }
    }

    /// Score one article from loosely-typed analyzer payloads.
    ///
    /// Each payload is coerced through [`normalize`] first, so missing or
    /// malformed fields collapse to safe defaults instead of erroring.
    pub fn score_values(
        &self,
        sentiment: &serde_json::Value,
        compliance: &serde_json::Value,
        fact_check: &serde_json::Value,
    ) -> TrustAssessment {
        self.score(
            &normalize::sentiment_from_value(sentiment),
            &normalize::compliance_from_value(compliance),
            &normalize::fact_check_from_value(fact_check),
        )
    }
}

impl Default for TrustScorer {
    fn default() -> Self {
        Self::new()
    }
}
