//! Trend aggregation input and output models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sentiment::{SentimentLabel, SentimentResult};

/// Minimal projection of an article needed for trend aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleTrendRecord {
    /// Cleaned article text; keyword extraction tokenizes this.
    pub text: String,
    pub sentiment: SentimentResult,
    /// Topic label from the external topic modeler.
    pub topic: String,
    /// Publication time, carried through for rendering. Aggregation never
    /// consults it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleTrendRecord {
    /// Topic substituted when the modeler supplies none.
    pub const UNKNOWN_TOPIC: &'static str = "Unknown";

    pub fn new(
        text: impl Into<String>,
        sentiment: SentimentResult,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            sentiment,
            topic: topic.into(),
            published_at: None,
        }
    }
}

/// Batch-level trend summary. Recomputed fresh per batch; no incremental
/// state survives across batches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Most frequent topics as `(topic, count)`, at most five, ties broken
    /// by first-encountered order.
    pub top_topics: Vec<(String, u64)>,
    /// Complete sentiment distribution, never truncated.
    pub sentiment_trend: BTreeMap<SentimentLabel, u64>,
    /// Most frequent keyword candidates, at most ten.
    pub emerging_keywords: Vec<String>,
}

impl TrendReport {
    /// The documented result for an empty or all-invalid batch.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.top_topics.is_empty()
            && self.sentiment_trend.is_empty()
            && self.emerging_keywords.is_empty()
    }
}
