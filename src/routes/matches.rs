use crate::core::{check_batch, check_pair, Matcher};
use crate::models::{
    AddressPair, BatchMatchRequest, BatchMatchResult, EndpointUsage, ErrorResponse,
    HealthResponse, ServiceInfo, UsageInfo,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_batch_size: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info))
        .route("/health", web::get().to(health_check))
        .route("/match/", web::post().to(match_addresses))
        .route("/match/batch/", web::post().to(batch_match_addresses));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Service information endpoint
///
/// GET /
///
/// Returns a welcome message and example request bodies for both endpoints.
async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "Welcome to the Address Matcher API".to_string(),
        description: "This API helps you compare and match similar addresses using string matching"
            .to_string(),
        usage: UsageInfo {
            single_match: EndpointUsage {
                endpoint: "/match/".to_string(),
                method: "POST".to_string(),
                example_body: serde_json::json!({
                    "address1": "123 Main St, Suite 100, New York, NY 10001",
                    "address2": "123 Main Street, Ste 100, New York, NY 10001",
                    "threshold": 80.0
                }),
            },
            batch_match: EndpointUsage {
                endpoint: "/match/batch/".to_string(),
                method: "POST".to_string(),
                example_body: serde_json::json!({
                    "pairs": [
                        {
                            "address1": "123 Main St, Suite 100, New York, NY 10001",
                            "address2": "123 Main Street, Ste 100, New York, NY 10001",
                            "threshold": 80.0
                        },
                        {
                            "address1": "456 Oak Ave, Chicago, IL 60601",
                            "address2": "456 Oak Avenue, Chicago, IL 60601",
                            "threshold": 80.0
                        }
                    ]
                }),
            },
        },
    })
}

/// Match two addresses
///
/// POST /match/
///
/// Request body:
/// ```json
/// {
///   "address1": "123 Main St, New York",
///   "address2": "123 Main Street, New York",
///   "threshold": 80.0
/// }
/// ```
async fn match_addresses(
    state: web::Data<AppState>,
    req: web::Json<AddressPair>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return HttpResponse::UnprocessableEntity().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 422,
        });
    }

    if let Err(violation) = check_pair(&req) {
        tracing::info!("Rejected match request: {}", violation);
        return HttpResponse::UnprocessableEntity().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: violation.to_string(),
            status_code: 422,
        });
    }

    match state.matcher.score_single(&req) {
        Ok(result) => {
            tracing::debug!(
                "Scored pair: similarity={}, is_match={}",
                result.similarity,
                result.is_match
            );
            HttpResponse::Ok().json(result)
        }
        Err(e) => {
            tracing::error!("Scoring failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Scoring failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Match multiple pairs of addresses in parallel
///
/// POST /match/batch/
///
/// Request body:
/// ```json
/// {
///   "pairs": [
///     { "address1": "...", "address2": "...", "threshold": 80.0 }
///   ]
/// }
/// ```
async fn batch_match_addresses(
    state: web::Data<AppState>,
    req: web::Json<BatchMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for batch request: {}", errors);
        return HttpResponse::UnprocessableEntity().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 422,
        });
    }

    // Size and per-pair checks run before any scoring work starts
    if let Err(e) = check_batch(&req.pairs, state.max_batch_size) {
        tracing::info!("Rejected batch request: {}", e);
        return HttpResponse::UnprocessableEntity().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: e.to_string(),
            status_code: 422,
        });
    }

    let pairs = req.into_inner().pairs;
    let total = pairs.len();
    tracing::info!("Scoring batch of {} pairs", total);

    // The fan-out is CPU-bound; move it off the actix worker threads
    let matcher = state.matcher.clone();
    let outcome = web::block(move || matcher.run_batch(&pairs)).await;

    match outcome {
        Ok(Ok(outcome)) => {
            tracing::info!(
                "Batch complete: {} pairs, average similarity {}",
                outcome.total_pairs,
                outcome.average_similarity
            );
            HttpResponse::Ok().json(BatchMatchResult {
                results: outcome.results,
                total_pairs: outcome.total_pairs,
                average_similarity: outcome.average_similarity,
            })
        }
        Ok(Err(e)) => {
            tracing::error!("Batch scoring failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Batch scoring failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
        Err(e) => {
            tracing::error!("Batch task failed to complete: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Batch scoring failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
