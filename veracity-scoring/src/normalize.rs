//! Defensive coercion of loosely-typed analyzer payloads.
//!
//! Upstream analyzers hand the coordinator JSON; a failure producing any one
//! result must not abort the article. Everything here is total: malformed
//! payloads collapse to the documented safe defaults, never to an error.

use serde_json::Value;

use veracity_core::models::{
    ComplianceResult, FactCheckResult, MatchedSource, SentimentLabel, SentimentResult,
};

/// Coerce a sentiment payload.
///
/// A bare string is treated as a label at full confidence; an object is read
/// field-wise (unrecognized label vocabulary becomes `unknown`, missing score
/// becomes 0.0); anything else collapses to neutral at zero confidence.
pub fn sentiment_from_value(value: &Value) -> SentimentResult {
    match value {
        Value::String(label) => {
            let label = label.parse().unwrap_or(SentimentLabel::Unknown);
            SentimentResult::new(label, 1.0)
        }
        Value::Object(map) => {
            let label = map
                .get("label")
                .and_then(Value::as_str)
                .map(|s| s.parse().unwrap_or(SentimentLabel::Unknown))
                .unwrap_or_default();
            let score = map.get("score").and_then(Value::as_f64).unwrap_or(0.0);
            SentimentResult::new(label, score)
        }
        _ => SentimentResult::neutral(),
    }
}

/// Coerce a compliance payload.
///
/// Non-string issue entries are dropped; `compliant` is derived from the
/// surviving issues, so a flag that disagrees with the issue list is
/// recomputed. Anything that is not an object collapses to a clean result.
pub fn compliance_from_value(value: &Value) -> ComplianceResult {
    match value {
        Value::Object(map) => {
            let issues: Vec<String> = map
                .get("issues")
                .and_then(Value::as_array)
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default();
            ComplianceResult::from_issues(issues)
        }
        _ => ComplianceResult::clean(),
    }
}

/// Coerce a fact-check payload.
///
/// A missing `verified` flag defaults to `true` (verification is assumed, not
/// penalized); malformed source entries are dropped. Anything that is not an
/// object collapses to the verified default.
pub fn fact_check_from_value(value: &Value) -> FactCheckResult {
    match value {
        Value::Object(map) => {
            let verified = map.get("verified").and_then(Value::as_bool).unwrap_or(true);
            let matched_sources = map
                .get("matched_sources")
                .and_then(Value::as_array)
                .map(|entries| entries.iter().filter_map(matched_source_from_value).collect())
                .unwrap_or_default();
            FactCheckResult {
                verified,
                matched_sources,
            }
        }
        _ => FactCheckResult::default(),
    }
}

fn matched_source_from_value(value: &Value) -> Option<MatchedSource> {
    let map = value.as_object()?;
    Some(MatchedSource {
        keyword: map.get("keyword")?.as_str()?.to_string(),
        source: map.get("source")?.as_str()?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_sentiment_gets_full_confidence() {
        let s = sentiment_from_value(&json!("positive"));
        assert_eq!(s.label, SentimentLabel::Positive);
        assert!((s.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_object_sentiment_collapses_to_neutral() {
        let s = sentiment_from_value(&json!(42));
        assert_eq!(s, SentimentResult::neutral());
        let s = sentiment_from_value(&Value::Null);
        assert_eq!(s, SentimentResult::neutral());
    }

    #[test]
    fn unrecognized_label_becomes_unknown() {
        let s = sentiment_from_value(&json!({"label": "LABEL_2", "score": 0.8}));
        assert_eq!(s.label, SentimentLabel::Unknown);
    }

    #[test]
    fn missing_score_defaults_to_zero() {
        let s = sentiment_from_value(&json!({"label": "negative"}));
        assert!((s.score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inconsistent_compliant_flag_is_recomputed() {
        let c = compliance_from_value(&json!({"compliant": true, "issues": ["x"]}));
        assert!(!c.compliant);
        let c = compliance_from_value(&json!({"compliant": false, "issues": []}));
        assert!(c.compliant);
    }

    #[test]
    fn non_string_issue_entries_are_dropped() {
        let c = compliance_from_value(&json!({"issues": ["a", 7, null, "b"]}));
        assert_eq!(c.issues, vec!["a", "b"]);
    }

    #[test]
    fn non_object_compliance_collapses_to_clean() {
        assert!(compliance_from_value(&Value::Null).compliant);
    }

    #[test]
    fn missing_fact_check_fields_default_to_verified() {
        let f = fact_check_from_value(&json!({}));
        assert!(f.verified);
        assert!(f.matched_sources.is_empty());
        let f = fact_check_from_value(&Value::Null);
        assert!(f.verified);
    }

    #[test]
    fn malformed_matched_sources_are_dropped() {
        let f = fact_check_from_value(&json!({
            "verified": true,
            "matched_sources": [
                {"keyword": "Tesla", "source": "Wikipedia"},
                {"keyword": 1},
                "junk"
            ]
        }));
        assert_eq!(f.matched_sources.len(), 1);
        assert_eq!(f.matched_sources[0].keyword, "Tesla");
    }
}
