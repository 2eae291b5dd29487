use serde::{Deserialize, Serialize};
use validator::Validate;

/// A pair of addresses to compare, with an optional match threshold
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressPair {
    #[validate(length(min = 1))]
    pub address1: String,
    #[validate(length(min = 1))]
    pub address2: String,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Minimum similarity score (0-100) required to consider two addresses a match
fn default_threshold() -> f64 {
    80.0
}

/// Request to compare multiple address pairs in one call
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchMatchRequest {
    #[validate(length(min = 1))]
    pub pairs: Vec<AddressPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults_to_80() {
        let pair: AddressPair =
            serde_json::from_str(r#"{"address1": "123 Main St", "address2": "123 Main Street"}"#)
                .unwrap();
        assert_eq!(pair.threshold, 80.0);
    }

    #[test]
    fn test_explicit_threshold_preserved() {
        let pair: AddressPair =
            serde_json::from_str(r#"{"address1": "a", "address2": "b", "threshold": 65.5}"#)
                .unwrap();
        assert_eq!(pair.threshold, 65.5);
    }
}
