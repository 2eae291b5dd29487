use rapidfuzz::distance::indel;

/// Token-sort-ratio similarity between two strings (0-100)
///
/// Tokenizes on whitespace, sorts each side's tokens, rejoins with single
/// spaces and computes an edit-distance-based ratio between the rejoined
/// forms. Word-order differences therefore do not lower the score.
///
/// The ratio itself is the normalized Indel similarity scaled to 0-100,
/// which is how rapidfuzz defines its simple ratio.
///
/// Symmetric: `token_sort_ratio(a, b) == token_sort_ratio(b, a)`.
/// Identical inputs score 100.0; fully disjoint strings score 0.0.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let a_sorted = sort_tokens(a);
    let b_sorted = sort_tokens(b);

    indel::normalized_similarity(a_sorted.chars(), b_sorted.chars()) * 100.0
}

/// Sort whitespace-separated tokens and rejoin with single spaces
fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Round a score to one decimal place
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
