use serde::{Deserialize, Serialize};

/// Result of comparing a single address pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Similarity score between the two addresses (0-100, one decimal place)
    pub similarity: f64,
    /// Whether the addresses are considered a match based on the threshold
    pub is_match: bool,
    pub normalized_address1: String,
    pub normalized_address2: String,
}

/// Response for the batch match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMatchResult {
    /// One result per input pair, in input order
    pub results: Vec<MatchResult>,
    pub total_pairs: usize,
    /// Arithmetic mean of all similarity scores, one decimal place
    pub average_similarity: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Service information response for the root endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub description: String,
    pub usage: UsageInfo,
}

/// Usage examples for both match endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageInfo {
    pub single_match: EndpointUsage,
    pub batch_match: EndpointUsage,
}

/// How to call one endpoint, with an example request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointUsage {
    pub endpoint: String,
    pub method: String,
    pub example_body: serde_json::Value,
}
