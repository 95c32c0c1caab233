//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Recommendations
        .route("/search", post(handlers::search))
        // Sky listings
        .route("/visible-stars", get(handlers::visible_stars))
        .route("/all-stars", get(handlers::all_stars))
        // Observation points
        .route("/points", get(handlers::list_points))
        .route("/points/{name}", get(handlers::point_details))
        // Terrain
        .route("/wild-spots", get(handlers::wild_spots))
        // Weather
        .route("/weather", get(handlers::weather))
        .route("/weather/forecast", get(handlers::forecast));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
