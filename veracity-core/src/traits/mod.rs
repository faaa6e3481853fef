//! Seams for the external collaborators the core never calls directly.
//!
//! The pipeline coordinator constructs one implementation of each (wrapping a
//! model, an HTTP client, whatever) and passes it by reference into the
//! function that needs it; nothing here is an ambient singleton.

pub mod analyzer;
pub mod fact_source;

pub use analyzer::{ISentimentAnalyzer, ITopicLabeler};
pub use fact_source::IFactSource;
