//! Shared builders for integration scenarios across the Veracity workspace.
//!
//! Keeps cross-crate tests free of hand-rolled model literals: typed builders
//! for analyzer results and trend records, plus raw JSON payload builders for
//! exercising the loosely-typed ingress paths.

use serde_json::{json, Value};

use veracity_core::models::{
    ArticleTrendRecord, ComplianceResult, FactCheckResult, SentimentLabel, SentimentResult,
};

/// A sentiment result with the given polarity and confidence.
pub fn sentiment(label: SentimentLabel, score: f64) -> SentimentResult {
    SentimentResult::new(label, score)
}

/// A compliance result carrying `n` numbered issues.
pub fn compliance_with_issues(n: usize) -> ComplianceResult {
    ComplianceResult::from_issues((0..n).map(|i| format!("issue {i}")).collect())
}

/// A verified fact-check result with one matched source per keyword.
pub fn verified_facts(keywords: &[&str]) -> FactCheckResult {
    FactCheckResult::from_matches(
        keywords
            .iter()
            .map(|keyword| veracity_core::models::MatchedSource {
                keyword: keyword.to_string(),
                source: "StubPedia".to_string(),
            })
            .collect(),
    )
}

/// A trend record with the given text, label, and topic.
pub fn trend_record(text: &str, label: SentimentLabel, topic: &str) -> ArticleTrendRecord {
    ArticleTrendRecord::new(text, SentimentResult::new(label, 0.5), topic)
}

/// A raw analyzer-shaped article payload for the JSON ingress paths.
pub fn article_payload(text: &str, label: &str, topic: &str) -> Value {
    json!({
        "text": text,
        "sentiment": {"label": label, "score": 0.5},
        "topic": topic,
    })
}
