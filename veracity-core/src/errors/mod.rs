//! Error types for the Veracity workspace.
//!
//! The scoring and aggregation core itself is total over normalized input and
//! never errors; these types cover the fallible edges: configuration loading,
//! user-supplied rule patterns, and external fact-source lookups.

pub mod compliance_error;
pub mod config_error;
pub mod fact_check_error;

pub use compliance_error::ComplianceError;
pub use config_error::ConfigError;
pub use fact_check_error::FactCheckError;

/// Umbrella error for all Veracity operations.
#[derive(Debug, thiserror::Error)]
pub enum VeracityError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compliance(#[from] ComplianceError),

    #[error(transparent)]
    FactCheck(#[from] FactCheckError),
}

/// Convenience alias used across the workspace.
pub type VeracityResult<T> = Result<T, VeracityError>;
