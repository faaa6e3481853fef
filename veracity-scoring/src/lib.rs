//! # veracity-scoring
//!
//! Per-article trust scoring: additive penalties and bonuses over normalized
//! analyzer results, with an auditable breakdown. Pure and synchronous; the
//! pipeline coordinator supplies the analyzer results and may call this from
//! any number of threads on disjoint articles.

pub mod normalize;
pub mod scorer;

pub use scorer::TrustScorer;
