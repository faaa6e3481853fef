use crate::errors::VeracityResult;

/// External reference source used for lightweight fact verification.
pub trait IFactSource: Send + Sync {
    /// Human-readable source name recorded in matched sources.
    fn name(&self) -> &str;

    /// Fetch a one-sentence reference summary for `keyword`.
    ///
    /// Returns `Ok(None)` when the source has no entry. Errors are recovered
    /// by the fact checker (the candidate is skipped), never propagated into
    /// a batch failure.
    fn lookup(&self, keyword: &str) -> VeracityResult<Option<String>>;
}
