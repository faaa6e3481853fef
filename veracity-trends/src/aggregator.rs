//! TrendAggregator — batch-level topic, sentiment, and keyword trends.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use veracity_core::config::TrendConfig;
use veracity_core::models::{
    ArticleTrendRecord, SentimentLabel, SentimentResult, TrendReport,
};

use crate::counter::OrderedCounter;
use crate::keywords::keyword_candidates;

/// Aggregates per-article records into a batch trend report.
///
/// Pure, stateless, idempotent: no cross-call memory, so repeated calls on
/// the same batch yield the same report, and a single aggregator can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct TrendAggregator {
    config: TrendConfig,
}

impl TrendAggregator {
    /// Create an aggregator with the default limits.
    pub fn new() -> Self {
        Self::with_config(TrendConfig::default())
    }

    /// Create an aggregator with explicit limits.
    pub fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Get the config.
    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Aggregate a batch of records.
    ///
    /// An empty batch is a valid result, not an error: the report is empty
    /// and the warning exists for observability only.
    ///
    /// # Examples
    ///
    /// ```
    /// use veracity_core::models::{ArticleTrendRecord, SentimentResult};
    /// use veracity_trends::TrendAggregator;
    ///
    /// let aggregator = TrendAggregator::new();
    /// let records = vec![ArticleTrendRecord::new(
    ///     "Breaking economic news today",
    ///     SentimentResult::neutral(),
    ///     "finance",
    /// )];
    /// let report = aggregator.aggregate(&records);
    /// assert_eq!(report.top_topics, vec![("finance".to_string(), 1)]);
    /// ```
    pub fn aggregate(&self, records: &[ArticleTrendRecord]) -> TrendReport {
        if records.is_empty() {
            warn!("no articles provided for trend aggregation");
            return TrendReport::empty();
        }

        let mut topics = OrderedCounter::new();
        let mut sentiments: BTreeMap<SentimentLabel, u64> = BTreeMap::new();
        let mut keywords = OrderedCounter::new();

        for record in records {
            let topic = if record.topic.is_empty() {
                ArticleTrendRecord::UNKNOWN_TOPIC
            } else {
                record.topic.as_str()
            };
            topics.add(topic.to_string());

            *sentiments.entry(record.sentiment.label).or_insert(0) += 1;

            keywords.extend(keyword_candidates(&record.text, self.config.keyword_min_chars));
        }

        TrendReport {
            top_topics: topics.most_common(self.config.top_topics_limit),
            sentiment_trend: sentiments,
            emerging_keywords: keywords
                .most_common(self.config.emerging_keywords_limit)
                .into_iter()
                .map(|(keyword, _)| keyword)
                .collect(),
        }
    }

    /// Aggregate loosely-typed record payloads.
    ///
    /// Entries that are not objects are dropped silently (a debug line counts
    /// them); a missing topic becomes `"Unknown"`, a missing sentiment label
    /// becomes neutral, and a missing or non-string text skips that record
    /// for keywords only. An all-invalid batch yields the empty report.
    pub fn aggregate_values(&self, values: &[Value]) -> TrendReport {
        let records: Vec<ArticleTrendRecord> =
            values.iter().filter_map(record_from_value).collect();
        let dropped = values.len() - records.len();
        if dropped > 0 {
            debug!(dropped, "dropped malformed trend records");
        }
        self.aggregate(&records)
    }
}

impl Default for TrendAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce one record payload; `None` for anything that is not an object.
fn record_from_value(value: &Value) -> Option<ArticleTrendRecord> {
    let map = value.as_object()?;
    let text = map.get("text").and_then(Value::as_str).unwrap_or_default();
    let label = map
        .get("sentiment")
        .and_then(Value::as_object)
        .and_then(|sentiment| sentiment.get("label"))
        .and_then(Value::as_str)
        .map(|s| s.parse().unwrap_or(SentimentLabel::Unknown))
        .unwrap_or_default();
    let topic = map
        .get("topic")
        .and_then(Value::as_str)
        .filter(|topic| !topic.is_empty())
        .unwrap_or(ArticleTrendRecord::UNKNOWN_TOPIC);

    Some(ArticleTrendRecord::new(
        text,
        SentimentResult::new(label, 0.0),
        topic,
    ))
}
