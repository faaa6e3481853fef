//! Compliance check outcome for one article.

use serde::{Deserialize, Serialize};

/// Result of rule-based compliance checking.
///
/// `compliant` is derived: it holds exactly when `issues` is empty. Issues
/// appear in rule-check order (banned keywords, then sensitive topics, then
/// category-specific rules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub compliant: bool,
    /// Human-readable rule-violation descriptions.
    pub issues: Vec<String>,
}

impl ComplianceResult {
    /// Build a result from collected issues; `compliant` is derived.
    pub fn from_issues(issues: Vec<String>) -> Self {
        Self {
            compliant: issues.is_empty(),
            issues,
        }
    }

    /// A passing result with no issues. The safe default substituted when the
    /// compliance checker produced nothing usable.
    pub fn clean() -> Self {
        Self {
            compliant: true,
            issues: Vec::new(),
        }
    }
}

impl Default for ComplianceResult {
    fn default() -> Self {
        Self::clean()
    }
}
