//! Keyword-table industry categorization.
//!
//! The cheap, deterministic half of article categorization; named-entity
//! extraction stays behind the external NLP seam.

/// Industry keyword table, in reporting order.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &["ai", "artificial intelligence", "software", "hardware", "cloud", "robotics", "quantum"],
    ),
    (
        "finance",
        &["bank", "stocks", "investment", "ipo", "crypto", "bitcoin", "trading", "fintech"],
    ),
    (
        "healthcare",
        &["hospital", "vaccine", "covid", "drug", "treatment", "biotech", "medical"],
    ),
    ("energy", &["oil", "gas", "solar", "renewable", "nuclear", "power"]),
    ("retail", &["ecommerce", "amazon", "shopping", "retail", "consumer"]),
    ("automotive", &["car", "tesla", "ev", "battery", "automobile", "mobility"]),
];

/// Detect industries mentioned in `text` by keyword lookup.
///
/// Substring matching on the lowered text, table order. Empty text yields
/// nothing.
pub fn detect_industries(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(industry, _)| (*industry).to_string())
        .collect()
}
