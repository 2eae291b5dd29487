mod config;
mod core;
mod models;
mod routes;

use crate::config::Settings;
use crate::core::Matcher;
use crate::routes::matches::AppState;
use crate::routes::handle_json_payload_error;
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; LOG_LEVEL/LOG_FORMAT env vars override the
    // [logging] config section
    let log_level = settings.logging.resolved_level();
    let log_format = settings.logging.resolved_format();

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting address matcher service...");
    info!("Configuration loaded successfully (log level: {})", log_level);

    // Initialize the matcher with its bounded worker pool
    let matcher = Matcher::new(settings.matching.pool_size).unwrap_or_else(|e| {
        error!("Failed to build scoring worker pool: {}", e);
        panic!("Worker pool error: {}", e);
    });

    info!(
        "Matcher initialized ({} scoring workers, max batch size {})",
        matcher.pool_size(),
        settings.matching.max_batch_size
    );

    // Build application state
    let app_state = AppState {
        matcher,
        max_batch_size: settings.matching.max_batch_size,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
