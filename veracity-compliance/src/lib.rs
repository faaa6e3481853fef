//! # veracity-compliance
//!
//! Rule-based compliance checking (banned keywords, sensitive topics,
//! category-specific rules), keyword-table industry categorization, and
//! lightweight fact verification over an external reference source.

pub mod category;
pub mod engine;
pub mod fact_check;
pub mod rules;

pub use engine::ComplianceChecker;
pub use fact_check::verify_facts;
pub use rules::{CategoryTermRule, RuleKind, WordRule};
