//! Compliance rule model: compiled word rules and category-conditional rules.
//!
//! Word rules (banned keywords, sensitive topics) match case-insensitively on
//! word boundaries, so `fakery` never triggers the `fake` rule. Category
//! rules match by plain substring on lower-cased text and only when the
//! article's category list arms them.

use regex::Regex;

use veracity_core::config::CategoryRule;
use veracity_core::errors::{ComplianceError, VeracityResult};

/// The kind of unconditional word rule, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    BannedKeyword,
    SensitiveTopic,
}

/// A compiled unconditional rule.
#[derive(Debug, Clone)]
pub struct WordRule {
    kind: RuleKind,
    term: String,
    pattern: Regex,
}

impl WordRule {
    /// Compile a rule for `term`. The term is regex-escaped, so any literal
    /// word or phrase is accepted.
    pub fn new(kind: RuleKind, term: &str) -> VeracityResult<Self> {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).map_err(|e| {
            ComplianceError::InvalidRule {
                pattern: term.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            kind,
            term: term.to_string(),
            pattern,
        })
    }

    /// Whether `text` violates this rule.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// The issue description recorded when the rule fires.
    pub fn issue(&self) -> String {
        match self.kind {
            RuleKind::BannedKeyword => format!("Contains banned keyword: {}", self.term),
            RuleKind::SensitiveTopic => format!("Contains sensitive topic: {}", self.term),
        }
    }
}

/// A category-conditional rule: flags `term` only when the article's
/// category list arms it.
#[derive(Debug, Clone)]
pub struct CategoryTermRule {
    category: String,
    term: String,
}

impl CategoryTermRule {
    pub fn new(rule: &CategoryRule) -> Self {
        Self {
            category: rule.category.to_lowercase(),
            term: rule.term.to_lowercase(),
        }
    }

    /// Whether the category list arms this rule. Matched case-insensitively
    /// by substring, so an upstream `healthcare` label arms a `health` rule.
    pub fn armed_by(&self, categories: &[String]) -> bool {
        categories
            .iter()
            .any(|category| category.to_lowercase().contains(&self.category))
    }

    /// Whether `text` violates this rule (substring on lower-cased text).
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.term)
    }

    /// The issue description recorded when the rule fires.
    pub fn issue(&self) -> String {
        format!("Contains category-flagged term: {}", self.term)
    }
}
