//! Shared models for scoring and trend aggregation.
//!
//! All models here are plain serde-serializable data: the rendering layer and
//! any future API boundary serialize them to JSON directly.

pub mod compliance;
pub mod fact_check;
pub mod sentiment;
pub mod trend;
pub mod trust;

pub use compliance::ComplianceResult;
pub use fact_check::{FactCheckResult, MatchedSource};
pub use sentiment::{SentimentLabel, SentimentResult};
pub use trend::{ArticleTrendRecord, TrendReport};
pub use trust::{TrustAssessment, TrustScore};
