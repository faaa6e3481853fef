//! Property tests for the scorer's invariants.

use proptest::prelude::*;

use veracity_core::models::{
    ComplianceResult, FactCheckResult, SentimentLabel, SentimentResult, TrustScore,
};
use veracity_scoring::TrustScorer;

fn arb_label() -> impl Strategy<Value = SentimentLabel> {
    prop_oneof![
        Just(SentimentLabel::Positive),
        Just(SentimentLabel::Negative),
        Just(SentimentLabel::Neutral),
        Just(SentimentLabel::Error),
        Just(SentimentLabel::Unknown),
    ]
}

proptest! {
    // ── Score always lands in [0, 100] ───────────────────────────────────
    #[test]
    fn score_is_always_bounded(
        label in arb_label(),
        confidence in 0.0f64..=1.0,
        issue_count in 0usize..40,
        verified in any::<bool>(),
    ) {
        let scorer = TrustScorer::new();
        let compliance = ComplianceResult::from_issues(
            (0..issue_count).map(|i| format!("issue {i}")).collect(),
        );
        let fact_check = if verified {
            FactCheckResult::default()
        } else {
            FactCheckResult::unverified()
        };

        let a = scorer.score(
            &SentimentResult::new(label, confidence),
            &compliance,
            &fact_check,
        );
        prop_assert!(a.trust_score.value() <= TrustScore::MAX as u8);
    }

    // ── Breakdown plus base reproduces the pre-clamp score ───────────────
    #[test]
    fn breakdown_sum_reproduces_pre_clamp_score(
        label in arb_label(),
        confidence in 0.0f64..=1.0,
        issue_count in 0usize..40,
        verified in any::<bool>(),
    ) {
        let scorer = TrustScorer::new();
        let compliance = ComplianceResult::from_issues(
            (0..issue_count).map(|i| format!("issue {i}")).collect(),
        );
        let fact_check = if verified {
            FactCheckResult::default()
        } else {
            FactCheckResult::unverified()
        };

        let a = scorer.score(
            &SentimentResult::new(label, confidence),
            &compliance,
            &fact_check,
        );
        let clamped = a.pre_clamp_score().clamp(0, 100);
        prop_assert_eq!(i64::from(a.trust_score.value()), clamped);
    }

    // ── Exactly one fact-check entry always applies ──────────────────────
    #[test]
    fn exactly_one_fact_check_entry(
        label in arb_label(),
        confidence in 0.0f64..=1.0,
        verified in any::<bool>(),
    ) {
        use veracity_core::models::trust::breakdown_keys;

        let scorer = TrustScorer::new();
        let a = scorer.score(
            &SentimentResult::new(label, confidence),
            &ComplianceResult::clean(),
            &if verified { FactCheckResult::default() } else { FactCheckResult::unverified() },
        );
        let penalty = a.breakdown.contains_key(breakdown_keys::FACT_CHECK_PENALTY);
        let bonus = a.breakdown.contains_key(breakdown_keys::FACT_VERIFIED_BONUS);
        prop_assert!(penalty != bonus);
    }

    // ── Determinism: same input, same output ─────────────────────────────
    #[test]
    fn scoring_is_deterministic(
        label in arb_label(),
        confidence in 0.0f64..=1.0,
        issue_count in 0usize..10,
    ) {
        let scorer = TrustScorer::new();
        let sentiment = SentimentResult::new(label, confidence);
        let compliance = ComplianceResult::from_issues(
            (0..issue_count).map(|i| format!("issue {i}")).collect(),
        );
        let fact_check = FactCheckResult::unverified();

        let first = scorer.score(&sentiment, &compliance, &fact_check);
        let second = scorer.score(&sentiment, &compliance, &fact_check);
        prop_assert_eq!(first, second);
    }
}
