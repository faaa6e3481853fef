//! # veracity-core
//!
//! Foundation crate for the Veracity news-trust core.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VeracityConfig;
pub use errors::{VeracityError, VeracityResult};
pub use models::{
    ArticleTrendRecord, ComplianceResult, FactCheckResult, MatchedSource, SentimentLabel,
    SentimentResult, TrendReport, TrustAssessment, TrustScore,
};
