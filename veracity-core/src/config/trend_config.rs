//! Configuration for trend aggregation.

use serde::{Deserialize, Serialize};

/// Limits for the trend aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Number of most-frequent topics reported. Default: 5.
    pub top_topics_limit: usize,
    /// Number of most-frequent keywords reported. Default: 10.
    pub emerging_keywords_limit: usize,
    /// A token must be strictly longer than this to qualify as a keyword
    /// candidate. Default: 5.
    pub keyword_min_chars: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            top_topics_limit: 5,
            emerging_keywords_limit: 10,
            keyword_min_chars: crate::constants::TREND_KEYWORD_MIN_CHARS,
        }
    }
}
