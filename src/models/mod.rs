// Model exports
pub mod requests;
pub mod responses;

pub use requests::{AddressPair, BatchMatchRequest};
pub use responses::{
    BatchMatchResult, EndpointUsage, ErrorResponse, HealthResponse, MatchResult, ServiceInfo,
    UsageInfo,
};
