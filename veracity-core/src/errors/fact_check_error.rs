/// External fact-source errors surfaced through [`IFactSource`]
/// implementations.
///
/// [`IFactSource`]: crate::traits::IFactSource
#[derive(Debug, thiserror::Error)]
pub enum FactCheckError {
    #[error("fact source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    #[error("lookup failed for keyword '{keyword}': {reason}")]
    LookupFailed { keyword: String, reason: String },
}
