//! ComplianceChecker — compile the configured rules once, check many texts.

use tracing::debug;

use veracity_core::config::ComplianceConfig;
use veracity_core::errors::VeracityResult;
use veracity_core::models::ComplianceResult;

use crate::rules::{CategoryTermRule, RuleKind, WordRule};

/// Checks article text against the configured rule set.
///
/// Rules are compiled at construction; checking is infallible and allocates
/// only the issue list, so one checker serves any number of articles from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    banned: Vec<WordRule>,
    sensitive: Vec<WordRule>,
    category_rules: Vec<CategoryTermRule>,
}

impl ComplianceChecker {
    /// Create a checker with the default rule set.
    pub fn new() -> VeracityResult<Self> {
        Self::with_config(&ComplianceConfig::default())
    }

    /// Create a checker from explicit word lists and category rules.
    pub fn with_config(config: &ComplianceConfig) -> VeracityResult<Self> {
        let banned = config
            .banned_keywords
            .iter()
            .map(|term| WordRule::new(RuleKind::BannedKeyword, term))
            .collect::<VeracityResult<Vec<_>>>()?;
        let sensitive = config
            .sensitive_topics
            .iter()
            .map(|term| WordRule::new(RuleKind::SensitiveTopic, term))
            .collect::<VeracityResult<Vec<_>>>()?;
        let category_rules = config.category_rules.iter().map(CategoryTermRule::new).collect();

        Ok(Self {
            banned,
            sensitive,
            category_rules,
        })
    }

    /// Check `text` against every rule.
    ///
    /// Issues appear in rule-check order: banned keywords, then sensitive
    /// topics, then category-specific rules armed by `categories`.
    ///
    /// # Examples
    ///
    /// ```
    /// use veracity_compliance::ComplianceChecker;
    ///
    /// let checker = ComplianceChecker::new().unwrap();
    /// let result = checker.check("This hoax is pure clickbait", &[]);
    /// assert!(!result.compliant);
    /// assert_eq!(result.issues.len(), 2);
    /// ```
    pub fn check(&self, text: &str, categories: &[String]) -> ComplianceResult {
        let mut issues = Vec::new();

        for rule in &self.banned {
            if rule.matches(text) {
                issues.push(rule.issue());
            }
        }
        for rule in &self.sensitive {
            if rule.matches(text) {
                issues.push(rule.issue());
            }
        }
        for rule in &self.category_rules {
            if rule.armed_by(categories) && rule.matches(text) {
                issues.push(rule.issue());
            }
        }

        if !issues.is_empty() {
            debug!(issues = issues.len(), "compliance issues found");
        }
        ComplianceResult::from_issues(issues)
    }
}
