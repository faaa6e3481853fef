//! Aggregation behavior: empty batches, counting, tie-breaks, sanitization.

use serde_json::json;

use veracity_core::config::TrendConfig;
use veracity_core::models::{ArticleTrendRecord, SentimentLabel, SentimentResult, TrendReport};
use veracity_trends::TrendAggregator;

fn record(text: &str, label: SentimentLabel, topic: &str) -> ArticleTrendRecord {
    ArticleTrendRecord::new(text, SentimentResult::new(label, 0.5), topic)
}

// ── Empty and single-record batches ──────────────────────────────────────

#[test]
fn empty_batch_yields_the_documented_empty_report() {
    let report = TrendAggregator::new().aggregate(&[]);
    assert_eq!(report, TrendReport::empty());
    assert!(report.top_topics.is_empty());
    assert!(report.sentiment_trend.is_empty());
    assert!(report.emerging_keywords.is_empty());
}

#[test]
fn single_record_batch() {
    let report = TrendAggregator::new().aggregate(&[record(
        "Breaking economic news today",
        SentimentLabel::Neutral,
        "finance",
    )]);

    assert_eq!(report.top_topics, vec![("finance".to_string(), 1)]);
    assert_eq!(report.sentiment_trend[&SentimentLabel::Neutral], 1);
    // Only tokens longer than 5 chars starting with a letter qualify.
    assert!(report.emerging_keywords.contains(&"breaking".to_string()));
    assert!(report.emerging_keywords.contains(&"economic".to_string()));
    assert!(!report.emerging_keywords.contains(&"news".to_string()));
    assert!(!report.emerging_keywords.contains(&"today".to_string()));
}

// ── Topic counting ───────────────────────────────────────────────────────

#[test]
fn topics_are_counted_and_truncated_to_five() {
    let records: Vec<_> = (0..7)
        .flat_map(|i| {
            // topic-0 appears 8 times, topic-1 seven, ... topic-6 twice.
            std::iter::repeat(record("", SentimentLabel::Neutral, &format!("topic-{i}")))
                .take(8 - i)
        })
        .collect();

    let report = TrendAggregator::new().aggregate(&records);
    assert_eq!(report.top_topics.len(), 5);
    assert_eq!(report.top_topics[0], ("topic-0".to_string(), 8));
    assert_eq!(report.top_topics[4], ("topic-4".to_string(), 4));
}

#[test]
fn empty_topic_counts_as_unknown() {
    let report = TrendAggregator::new().aggregate(&[record("", SentimentLabel::Neutral, "")]);
    assert_eq!(report.top_topics, vec![("Unknown".to_string(), 1)]);
}

#[test]
fn topic_ties_break_by_first_encountered_order() {
    let records = vec![
        record("", SentimentLabel::Neutral, "zebra"),
        record("", SentimentLabel::Neutral, "apple"),
        record("", SentimentLabel::Neutral, "zebra"),
        record("", SentimentLabel::Neutral, "apple"),
    ];
    let report = TrendAggregator::new().aggregate(&records);
    // Equal counts: encounter order wins, not alphabetical order.
    assert_eq!(
        report.top_topics,
        vec![("zebra".to_string(), 2), ("apple".to_string(), 2)]
    );
}

// ── Sentiment distribution ───────────────────────────────────────────────

#[test]
fn sentiment_distribution_is_complete_and_untruncated() {
    let records = vec![
        record("", SentimentLabel::Positive, "a"),
        record("", SentimentLabel::Positive, "a"),
        record("", SentimentLabel::Negative, "a"),
        record("", SentimentLabel::Neutral, "a"),
        record("", SentimentLabel::Error, "a"),
        record("", SentimentLabel::Unknown, "a"),
    ];
    let report = TrendAggregator::new().aggregate(&records);
    assert_eq!(report.sentiment_trend.len(), 5);
    assert_eq!(report.sentiment_trend[&SentimentLabel::Positive], 2);
    assert_eq!(report.sentiment_trend[&SentimentLabel::Unknown], 1);
}

// ── Keyword extraction ───────────────────────────────────────────────────

#[test]
fn keyword_counting_is_case_insensitive_across_records() {
    let records = vec![
        record("Economic outlook", SentimentLabel::Neutral, "a"),
        record("economic growth", SentimentLabel::Neutral, "b"),
    ];
    let report = TrendAggregator::new().aggregate(&records);
    // "Economic" and "economic" must count as one keyword.
    assert_eq!(report.emerging_keywords[0], "economic");
    assert_eq!(
        report
            .emerging_keywords
            .iter()
            .filter(|k| *k == "economic")
            .count(),
        1
    );
}

#[test]
fn keywords_truncate_to_ten_with_stable_ties() {
    let text = "alphaaa bravooo charlie deltaaa echoooo foxtrot golfffff hotelll indiaaa juliett kilooooo limaaaa";
    let report = TrendAggregator::new().aggregate(&[record(text, SentimentLabel::Neutral, "a")]);
    assert_eq!(report.emerging_keywords.len(), 10);
    // All counts are 1, so the first ten tokens in encounter order survive.
    assert_eq!(report.emerging_keywords[0], "alphaaa");
    assert_eq!(report.emerging_keywords[9], "juliett");
}

#[test]
fn limits_are_configurable() {
    let aggregator = TrendAggregator::with_config(TrendConfig {
        top_topics_limit: 1,
        emerging_keywords_limit: 2,
        keyword_min_chars: 3,
    });
    let report = aggregator.aggregate(&[
        record("wide wider widest", SentimentLabel::Neutral, "a"),
        record("", SentimentLabel::Neutral, "b"),
    ]);
    assert_eq!(report.top_topics.len(), 1);
    assert_eq!(report.emerging_keywords, vec!["wide", "wider"]);
}

// ── Loosely-typed ingress ────────────────────────────────────────────────

#[test]
fn malformed_entries_are_dropped_not_fatal() {
    let values = vec![
        json!({"text": "Breaking economic news", "sentiment": {"label": "neutral"}, "topic": "finance"}),
        json!("not a record"),
        json!(17),
        json!(null),
        json!(["also", "not", "a", "record"]),
    ];
    let report = TrendAggregator::new().aggregate_values(&values);
    assert_eq!(report.top_topics, vec![("finance".to_string(), 1)]);
    assert_eq!(report.sentiment_trend[&SentimentLabel::Neutral], 1);
}

#[test]
fn all_invalid_batch_yields_empty_report() {
    let values = vec![json!(null), json!(1), json!("x")];
    let report = TrendAggregator::new().aggregate_values(&values);
    assert_eq!(report, TrendReport::empty());
}

#[test]
fn missing_fields_default_per_record() {
    let values = vec![
        // No topic, no sentiment: counted under Unknown/neutral.
        json!({"text": "Markets tumbled overnight"}),
        // Non-string text: skipped for keywords, counted elsewhere.
        json!({"text": 42, "sentiment": {"label": "positive"}, "topic": "finance"}),
    ];
    let report = TrendAggregator::new().aggregate_values(&values);
    assert_eq!(report.sentiment_trend[&SentimentLabel::Neutral], 1);
    assert_eq!(report.sentiment_trend[&SentimentLabel::Positive], 1);
    assert!(report
        .top_topics
        .contains(&("Unknown".to_string(), 1)));
    assert!(report
        .top_topics
        .contains(&("finance".to_string(), 1)));
    assert_eq!(
        report.emerging_keywords,
        vec!["markets", "tumbled", "overnight"]
    );
}

#[test]
fn unrecognized_label_strings_are_counted_as_unknown() {
    let values = vec![json!({"text": "", "sentiment": {"label": "LABEL_1"}, "topic": "t"})];
    let report = TrendAggregator::new().aggregate_values(&values);
    assert_eq!(report.sentiment_trend[&SentimentLabel::Unknown], 1);
}
