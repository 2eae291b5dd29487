use crate::core::scorer::{score_pair, ScoringError};
use crate::core::similarity::round_score;
use crate::models::{AddressPair, MatchResult};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Result of scoring a batch of address pairs
#[derive(Debug)]
pub struct BatchOutcome {
    /// One result per input pair, in input order
    pub results: Vec<MatchResult>,
    pub total_pairs: usize,
    pub average_similarity: f64,
}

/// Batch scoring orchestrator
///
/// Owns a bounded worker pool and fans scoring work out across it. The pool
/// is sized once at construction; parallelism never scales with batch size,
/// so a 1000-pair batch cannot exhaust the host process.
#[derive(Clone)]
pub struct Matcher {
    pool: Arc<ThreadPool>,
}

impl Matcher {
    /// Create a matcher with a worker pool of `pool_size` threads
    ///
    /// A size of 0 lets rayon pick its CPU-count default.
    pub fn new(pool_size: usize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new().num_threads(pool_size).build()?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Number of worker threads in the pool
    pub fn pool_size(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Score a single address pair
    pub fn score_single(&self, pair: &AddressPair) -> Result<MatchResult, ScoringError> {
        score_pair(pair)
    }

    /// Score a batch of address pairs in parallel
    ///
    /// Fans out one scoring task per pair across the worker pool. Rayon's
    /// indexed parallel iterator writes each result back into its input
    /// position, so output order matches input order regardless of which
    /// worker finishes first. Any scoring error fails the whole batch; no
    /// partial results are returned.
    ///
    /// Callers must validate the batch first (see `core::validate`).
    pub fn run_batch(&self, pairs: &[AddressPair]) -> Result<BatchOutcome, ScoringError> {
        let results: Vec<MatchResult> = self
            .pool
            .install(|| pairs.par_iter().map(score_pair).collect::<Result<_, _>>())?;

        let total_pairs = results.len();
        let average_similarity = if total_pairs == 0 {
            0.0
        } else {
            let sum: f64 = results.iter().map(|r| r.similarity).sum();
            round_score(sum / total_pairs as f64)
        };

        Ok(BatchOutcome {
            results,
            total_pairs,
            average_similarity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str, threshold: f64) -> AddressPair {
        AddressPair {
            address1: a.to_string(),
            address2: b.to_string(),
            threshold,
        }
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let matcher = Matcher::new(4).unwrap();

        // Give every pair a distinct normalized form so positions are
        // distinguishable in the output
        let pairs: Vec<AddressPair> = (0..100)
            .map(|i| pair(&format!("{} Main St", i), &format!("{} Main St", i), 80.0))
            .collect();

        let outcome = matcher.run_batch(&pairs).unwrap();

        assert_eq!(outcome.total_pairs, 100);
        for (i, result) in outcome.results.iter().enumerate() {
            assert_eq!(result.normalized_address1, format!("{} main st", i));
        }
    }

    #[test]
    fn test_average_similarity() {
        let matcher = Matcher::new(2).unwrap();
        let pairs = vec![
            pair("123 Main St", "123 Main St", 80.0), // 100.0
            pair("abc", "xyz", 80.0),                 // 0.0
        ];

        let outcome = matcher.run_batch(&pairs).unwrap();

        assert_eq!(outcome.total_pairs, 2);
        assert_eq!(outcome.average_similarity, 50.0);
    }

    #[test]
    fn test_average_rounded_to_one_decimal() {
        let matcher = Matcher::new(2).unwrap();
        let pairs = vec![
            pair("123 Main Street", "123 Main St", 0.0),
            pair("456 Oak Avenue", "456 Oak Ave", 0.0),
            pair("789 Pine Road", "789 Pine Rd", 0.0),
        ];

        let outcome = matcher.run_batch(&pairs).unwrap();

        let mean: f64 = outcome.results.iter().map(|r| r.similarity).sum::<f64>()
            / outcome.results.len() as f64;
        assert_eq!(outcome.average_similarity, round_score(mean));
    }

    #[test]
    fn test_empty_slice_yields_zero_average() {
        // Unreachable through the validated entry point, but the orchestrator
        // itself must not divide by zero
        let matcher = Matcher::new(1).unwrap();
        let outcome = matcher.run_batch(&[]).unwrap();
        assert_eq!(outcome.total_pairs, 0);
        assert_eq!(outcome.average_similarity, 0.0);
    }

    #[test]
    fn test_pool_size_is_fixed() {
        let matcher = Matcher::new(2).unwrap();
        assert_eq!(matcher.pool_size(), 2);

        // Pool size does not grow with batch size
        let pairs: Vec<AddressPair> = (0..500)
            .map(|i| pair(&format!("{} Elm St", i), "1 Elm St", 80.0))
            .collect();
        let outcome = matcher.run_batch(&pairs).unwrap();
        assert_eq!(outcome.results.len(), 500);
        assert_eq!(matcher.pool_size(), 2);
    }

    #[test]
    fn test_score_single_matches_batch_result() {
        let matcher = Matcher::new(1).unwrap();
        let p = pair("123 Main Street, New York", "123 Main St, NY", 80.0);

        let single = matcher.score_single(&p).unwrap();
        let batch = matcher.run_batch(std::slice::from_ref(&p)).unwrap();

        assert_eq!(single.similarity, batch.results[0].similarity);
        assert_eq!(batch.average_similarity, single.similarity);
    }
}
