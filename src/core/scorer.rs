use crate::core::normalize::normalize_address;
use crate::core::similarity::{round_score, token_sort_ratio};
use crate::models::{AddressPair, MatchResult};
use thiserror::Error;

/// Unexpected failure inside the similarity computation
///
/// Should not occur on validated input; kept as a defensive catch-all so a
/// bad score aborts the request instead of leaking into results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("similarity computation produced an invalid score: {score}")]
    InvalidScore { score: f64 },
}

/// Score a single address pair
///
/// Normalizes both addresses, computes the token-sort-ratio between the
/// normalized forms and applies the pair's threshold. Deterministic and
/// side-effect-free; assumes the pair has already passed validation.
pub fn score_pair(pair: &AddressPair) -> Result<MatchResult, ScoringError> {
    let normalized_address1 = normalize_address(&pair.address1);
    let normalized_address2 = normalize_address(&pair.address2);

    let raw = token_sort_ratio(&normalized_address1, &normalized_address2);
    if !raw.is_finite() || !(0.0..=100.0).contains(&raw) {
        return Err(ScoringError::InvalidScore { score: raw });
    }

    let similarity = round_score(raw);
    let is_match = similarity >= pair.threshold;

    Ok(MatchResult {
        similarity,
        is_match,
        normalized_address1,
        normalized_address2,
    })
}
