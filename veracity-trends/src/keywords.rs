//! Naive frequency-grade keyword candidates. Not NLP-grade, by design.

/// Collect keyword candidates from one article text.
///
/// Tokenizes on whitespace; a token qualifies when it is strictly longer than
/// `min_chars` characters and its first character is alphabetic. Candidates
/// are lowercased so counting is case-insensitive.
pub fn keyword_candidates(text: &str, min_chars: usize) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(move |token| {
        let starts_alpha = token.chars().next().is_some_and(char::is_alphabetic);
        (starts_alpha && token.chars().count() > min_chars).then(|| token.to_lowercase())
    })
}
