//! Span definitions per operation: scoring, trend aggregation, compliance,
//! fact checking.
//!
//! Each span carries its operation's key metadata via the `tracing` crate.

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($article:expr) => {
        tracing::info_span!("veracity.scoring", article = %$article)
    };
}

/// Create a trend-aggregation span.
#[macro_export]
macro_rules! trends_span {
    ($batch_size:expr) => {
        tracing::info_span!("veracity.trends", batch_size = $batch_size)
    };
}

/// Create a compliance-check span.
#[macro_export]
macro_rules! compliance_span {
    ($article:expr) => {
        tracing::info_span!("veracity.compliance", article = %$article)
    };
}

/// Create a fact-check span.
#[macro_export]
macro_rules! fact_check_span {
    ($article:expr, $source:expr) => {
        tracing::info_span!("veracity.fact_check", article = %$article, source = %$source)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "veracity.scoring";
    pub const TRENDS: &str = "veracity.trends";
    pub const COMPLIANCE: &str = "veracity.compliance";
    pub const FACT_CHECK: &str = "veracity.fact_check";
}
