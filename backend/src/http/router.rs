//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only public data, so any origin may query it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static segments take priority over `{start}` when matching
    let api_v1 = Router::new()
        .route("/precipitation", get(handlers::get_precipitation))
        .route("/stations", get(handlers::get_stations))
        .route("/tobs", get(handlers::get_tobs))
        .route("/{start}", get(handlers::get_temperature_from))
        .route("/{start}/{end}", get(handlers::get_temperature_range));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1.0", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
