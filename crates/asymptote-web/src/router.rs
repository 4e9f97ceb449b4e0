//! Axum router: maps URL paths to handlers.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};

use crate::handlers::{analyze::analyze, health::health, index::index};
use crate::state::{AppState, SharedState};

/// Build the full router. Static assets are served from `static_dir`.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/",        get(index))

        // API
        .route("/analyze", post(analyze))
        .route("/health",  get(health))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
