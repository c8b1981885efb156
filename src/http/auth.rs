//! Admin claim extraction from request headers.
//!
//! The index only checks a boolean admin claim; deciding whether a
//! request carries it happens here, from configurable header names.

use axum::http::HeaderMap;

use crate::core::config::AuthConfig;

/// Authorization signals asserted by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminClaim {
    pub is_admin: bool,
    pub actor: String,
}

impl AdminClaim {
    /// Read the admin flag and actor from `headers`.
    ///
    /// The admin header must equal `true` (case-insensitive); anything
    /// else, including a missing header, means no admin claim.
    pub fn from_headers(headers: &HeaderMap, auth: &AuthConfig) -> Self {
        let is_admin = headers
            .get(auth.admin_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let actor = headers
            .get(auth.actor_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(auth.default_actor.as_str())
            .to_string();

        Self { is_admin, actor }
    }
}
