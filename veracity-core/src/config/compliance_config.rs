//! Configuration for rule-based compliance checking.

use serde::{Deserialize, Serialize};

/// A category-specific rule: flag `term` when the article's category list
/// includes `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category that arms the rule (matched case-insensitively, by substring,
    /// so an upstream `healthcare` label arms a `health` rule).
    pub category: String,
    /// Term flagged by substring match on lower-cased text.
    pub term: String,
}

/// Word lists and category rules for the compliance checker.
///
/// Banned keywords and sensitive topics are matched case-insensitively on
/// word boundaries; category terms by plain substring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Keywords that always raise an issue. Default: fake, hoax, rumor, clickbait.
    pub banned_keywords: Vec<String>,
    /// Topics that always raise an issue. Default: terrorism, violence, hate speech.
    pub sensitive_topics: Vec<String>,
    /// Category-conditional rules. Default: finance→scam, health→unverified cure.
    pub category_rules: Vec<CategoryRule>,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            banned_keywords: ["fake", "hoax", "rumor", "clickbait"]
                .map(String::from)
                .to_vec(),
            sensitive_topics: ["terrorism", "violence", "hate speech"]
                .map(String::from)
                .to_vec(),
            category_rules: vec![
                CategoryRule {
                    category: "finance".to_string(),
                    term: "scam".to_string(),
                },
                CategoryRule {
                    category: "health".to_string(),
                    term: "unverified cure".to_string(),
                },
            ],
        }
    }
}
