use crate::models::AddressPair;
use thiserror::Error;

/// A constraint violation on a single address pair
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PairViolation {
    #[error("{field} must not be empty or whitespace-only")]
    BlankAddress { field: &'static str },
    #[error("threshold {value} is outside the allowed range 0.0-100.0")]
    ThresholdOutOfRange { value: f64 },
}

/// A batch-level validation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("batch must contain at least one pair")]
    EmptyBatch,
    #[error("batch size {len} exceeds the maximum of {max} pairs")]
    BatchTooLarge { len: usize, max: usize },
    #[error("pair at index {index}: {violation}")]
    InvalidPair {
        index: usize,
        violation: PairViolation,
    },
}

/// Check a single address pair against field constraints
pub fn check_pair(pair: &AddressPair) -> Result<(), PairViolation> {
    if pair.address1.trim().is_empty() {
        return Err(PairViolation::BlankAddress { field: "address1" });
    }
    if pair.address2.trim().is_empty() {
        return Err(PairViolation::BlankAddress { field: "address2" });
    }
    if !(0.0..=100.0).contains(&pair.threshold) {
        return Err(PairViolation::ThresholdOutOfRange {
            value: pair.threshold,
        });
    }
    Ok(())
}

/// Check a batch of address pairs before any scoring work begins
///
/// Policy: fail fast on the first violation, scanning pairs in input order.
/// The returned error names the offending index.
pub fn check_batch(pairs: &[AddressPair], max_batch_size: usize) -> Result<(), ValidationError> {
    if pairs.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    if pairs.len() > max_batch_size {
        return Err(ValidationError::BatchTooLarge {
            len: pairs.len(),
            max: max_batch_size,
        });
    }

    for (index, pair) in pairs.iter().enumerate() {
        if let Err(violation) = check_pair(pair) {
            return Err(ValidationError::InvalidPair { index, violation });
        }
    }

    Ok(())
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
    fn test_valid_pair_passes() {
        assert!(check_pair(&pair("123 Main St", "123 Main Street", 80.0)).is_ok());
    }

    #[test]
    fn test_blank_address_rejected() {
        let err = check_pair(&pair("", "123 Main St", 80.0)).unwrap_err();
        assert_eq!(err, PairViolation::BlankAddress { field: "address1" });

        let err = check_pair(&pair("123 Main St", "   \t ", 80.0)).unwrap_err();
        assert_eq!(err, PairViolation::BlankAddress { field: "address2" });
    }

    #[test]
    fn test_threshold_range_enforced() {
        assert!(check_pair(&pair("a", "b", 0.0)).is_ok());
        assert!(check_pair(&pair("a", "b", 100.0)).is_ok());

        let err = check_pair(&pair("a", "b", 100.1)).unwrap_err();
        assert_eq!(err, PairViolation::ThresholdOutOfRange { value: 100.1 });

        let err = check_pair(&pair("a", "b", -0.5)).unwrap_err();
        assert_eq!(err, PairViolation::ThresholdOutOfRange { value: -0.5 });
    }

    #[test]
    fn test_empty_batch_rejected() {
        assert_eq!(check_batch(&[], 1000).unwrap_err(), ValidationError::EmptyBatch);
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let pairs: Vec<AddressPair> = (0..1001).map(|_| pair("a", "b", 80.0)).collect();
        assert_eq!(
            check_batch(&pairs, 1000).unwrap_err(),
            ValidationError::BatchTooLarge { len: 1001, max: 1000 }
        );
    }

    #[test]
    fn test_batch_at_limit_accepted() {
        let pairs: Vec<AddressPair> = (0..1000).map(|_| pair("a", "b", 80.0)).collect();
        assert!(check_batch(&pairs, 1000).is_ok());
    }

    #[test]
    fn test_fail_fast_reports_first_bad_index() {
        let pairs = vec![
            pair("123 Main St", "123 Main Street", 80.0),
            pair("", "456 Oak Ave", 80.0),
            pair("a", "b", 150.0),
        ];

        // Both index 1 and index 2 are invalid; fail-fast reports index 1
        let err = check_batch(&pairs, 1000).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPair {
                index: 1,
                violation: PairViolation::BlankAddress { field: "address1" },
            }
        );
    }

    #[test]
    fn test_error_message_names_index() {
        let pairs = vec![pair("a", "b", 80.0), pair("a", "b", -1.0)];
        let err = check_batch(&pairs, 1000).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("index 1"), "message was: {}", message);
    }
}
