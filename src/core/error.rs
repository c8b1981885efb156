//! Error types and error handling for the docsift service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for docsift operations
pub type Result<T> = std::result::Result<T, DocsiftError>;

/// Main error type for the docsift service
#[derive(Error, Debug)]
pub enum DocsiftError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocsiftError {
    /// Error raised when an admin-gated operation lacks the admin claim
    pub fn admin_required() -> Self {
        DocsiftError::PermissionDenied("admin role required".to_string())
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocsiftError::DocumentNotFound(_) | DocsiftError::InvalidPath(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, DocsiftError::PermissionDenied(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocsiftError::InvalidRequest(_)
                | DocsiftError::InvalidQuery(_)
                | DocsiftError::ConfigError(_)
        )
    }
}
