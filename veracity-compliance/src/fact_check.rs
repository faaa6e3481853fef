//! Lightweight fact verification: cross-reference an article's title-case
//! keywords against an external reference source.

use tracing::debug;

use veracity_core::constants::{FACT_CHECK_KEYWORD_MIN_CHARS, FACT_CHECK_LOOKUP_LIMIT};
use veracity_core::models::{FactCheckResult, MatchedSource};
use veracity_core::traits::IFactSource;

/// Verify `text` against a reference source.
///
/// Candidate keywords are title-case tokens strictly longer than 3 chars, in
/// text order; at most the first 3 are looked up. A candidate matches when
/// its lowered form appears in the lowered reference summary. A lookup error
/// skips that candidate only, so one flaky lookup never fails the article.
/// Empty or whitespace text is unverified by definition.
pub fn verify_facts(text: &str, source: &dyn IFactSource) -> FactCheckResult {
    if text.trim().is_empty() {
        return FactCheckResult::unverified();
    }

    let mut matched_sources = Vec::new();
    for keyword in keyword_candidates(text).take(FACT_CHECK_LOOKUP_LIMIT) {
        match source.lookup(keyword) {
            Ok(Some(summary)) => {
                if summary.to_lowercase().contains(&keyword.to_lowercase()) {
                    matched_sources.push(MatchedSource {
                        keyword: keyword.to_string(),
                        source: source.name().to_string(),
                    });
                }
            }
            Ok(None) => {}
            Err(error) => {
                debug!(keyword, %error, "fact lookup failed, skipping candidate");
            }
        }
    }

    FactCheckResult::from_matches(matched_sources)
}

/// Title-case tokens longer than the minimum length, in text order.
fn keyword_candidates(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|token| {
        is_title_case(token) && token.chars().count() > FACT_CHECK_KEYWORD_MIN_CHARS
    })
}

/// One leading uppercase character, no uppercase afterwards.
fn is_title_case(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| !c.is_uppercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_selection() {
        let candidates: Vec<&str> =
            keyword_candidates("The President visited Berlin and NATO headquarters today").collect();
        // "The" is too short, "NATO" is not title-case, lowercase words never qualify.
        assert_eq!(candidates, vec!["President", "Berlin"]);
    }

    #[test]
    fn title_case_rules() {
        assert!(is_title_case("Tesla"));
        assert!(!is_title_case("TESLA"));
        assert!(!is_title_case("TeSla"));
        assert!(!is_title_case("tesla"));
        assert!(!is_title_case("4chan"));
        assert!(!is_title_case(""));
    }
}
