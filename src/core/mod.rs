// Core algorithm exports
pub mod batch;
pub mod normalize;
pub mod scorer;
pub mod similarity;
pub mod validate;

pub use batch::{BatchOutcome, Matcher};
pub use normalize::normalize_address;
pub use scorer::{score_pair, ScoringError};
pub use similarity::{round_score, token_sort_ratio};
pub use validate::{check_batch, check_pair, PairViolation, ValidationError};
