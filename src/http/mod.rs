//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides HTTP endpoints for search, document upsert and the
//! exclusion workflow via Axum web framework.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

/// Build the API router over shared services
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_handler))
        // API endpoints
        .route("/api/search", get(search_handler))
        .route("/api/documents", post(upsert_handler))
        .route("/api/documents/excluded", get(list_excluded_handler))
        .route("/api/documents/:doc_id/exclude", post(exclude_handler))
        .route("/api/documents/:doc_id/include", post(include_handler))
        // Add middleware
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services)
}
