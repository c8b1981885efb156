//! HTTP status mapping for docsift errors.
//!
//! Core errors stay protocol-agnostic; this module decides which
//! status code each one maps to and renders the JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::DocsiftError;

impl DocsiftError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_forbidden() {
            StatusCode::FORBIDDEN
        } else if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for DocsiftError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
