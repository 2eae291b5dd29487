//! Address Matcher - fuzzy address matching service
//!
//! This library provides the core scoring pipeline used by the address
//! matcher API: normalization, token-sort-ratio similarity and parallel
//! batch orchestration over a bounded worker pool.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{normalize_address, score_pair, token_sort_ratio, Matcher};
pub use crate::models::{AddressPair, BatchMatchRequest, BatchMatchResult, MatchResult};
