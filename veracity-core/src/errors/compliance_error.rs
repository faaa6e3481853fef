/// Compliance-rule construction errors.
#[derive(Debug, thiserror::Error)]
pub enum ComplianceError {
    #[error("invalid compliance rule pattern '{pattern}': {reason}")]
    InvalidRule { pattern: String, reason: String },
}
