//! HTTP request handlers for the docsift API
//!
//! Implements handlers for the REST endpoints: health, search,
//! document upsert, and the admin-gated exclusion workflow.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::error::DocsiftError;
use crate::core::services::Services;
use crate::core::types::*;
use crate::http::auth::AdminClaim;

/// Query string of the search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search query; a missing `q` behaves like an empty query
    #[serde(default)]
    pub q: String,
}

/// Health check handler
///
/// Returns server status, version and document counts.
pub async fn health_handler(State(services): State<Arc<Services>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documents: services.index.stats(),
    })
}

/// Search handler
///
/// Runs a case-insensitive literal substring search over visible
/// documents. An empty query returns an empty list.
///
/// # Errors
///
/// - `InvalidQuery`: Query exceeds the configured maximum length
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchHit>>, DocsiftError> {
    let max_len = services.config.search.max_query_length;
    if params.q.chars().count() > max_len {
        return Err(DocsiftError::InvalidQuery(format!(
            "Query exceeds {max_len} characters"
        )));
    }

    Ok(Json(services.index.search(&params.q)))
}

/// Upsert document handler
///
/// Inserts a document or replaces the one with the same `doc_id`,
/// keeping its exclusion state.
///
/// # Errors
///
/// - `InvalidRequest`: Body is not JSON, misses a required key, or has
///   an empty `doc_id`
pub async fn upsert_handler(
    State(services): State<Arc<Services>>,
    payload: Result<Json<DocumentInput>, JsonRejection>,
) -> Result<Json<OkResponse>, DocsiftError> {
    let Json(input) = payload.map_err(|e| DocsiftError::InvalidRequest(e.body_text()))?;

    if input.id.is_empty() {
        return Err(DocsiftError::InvalidRequest(
            "doc_id cannot be empty".to_string(),
        ));
    }

    services.index.upsert(input);

    Ok(Json(OkResponse { ok: true }))
}

/// List excluded documents handler
///
/// # Errors
///
/// - `PermissionDenied`: Request lacks the admin claim
pub async fn list_excluded_handler(
    State(services): State<Arc<Services>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ExcludedDocument>>, DocsiftError> {
    let claim = AdminClaim::from_headers(&headers, &services.config.auth);
    let rows = services.index.list_excluded(claim.is_admin)?;
    Ok(Json(rows))
}

/// Exclude document handler
///
/// Hides a document from search, recording the actor header.
///
/// # Errors
///
/// - `PermissionDenied`: Request lacks the admin claim
/// - `DocumentNotFound`: No document with this id
pub async fn exclude_handler(
    State(services): State<Arc<Services>>,
    Path(doc_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<OkResponse>, DocsiftError> {
    let claim = AdminClaim::from_headers(&headers, &services.config.auth);
    services
        .index
        .exclude(&doc_id, &claim.actor, claim.is_admin)?;
    Ok(Json(OkResponse { ok: true }))
}

/// Include document handler
///
/// Makes an excluded document searchable again.
///
/// # Errors
///
/// - `PermissionDenied`: Request lacks the admin claim
/// - `DocumentNotFound`: No document with this id
pub async fn include_handler(
    State(services): State<Arc<Services>>,
    Path(doc_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<OkResponse>, DocsiftError> {
    let claim = AdminClaim::from_headers(&headers, &services.config.auth);
    services.index.include(&doc_id, claim.is_admin)?;
    Ok(Json(OkResponse { ok: true }))
}
