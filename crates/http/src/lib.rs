//! HTTP API server for climateqa.

pub mod api_error;
mod api_types;
mod frontend;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use climateqa_service::QueryService;

pub use api_types::{AskRequest, AskResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Service answering and logging queries.
    pub query_service: Arc<QueryService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(frontend::serve_frontend))
        .route("/health", get(health))
        .route("/ask", post(handlers::ask::ask))
        .route("/history", get(handlers::records::history))
        .route("/climate-data", get(handlers::records::climate_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
