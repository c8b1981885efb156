//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **index**: In-memory document index, search and exclusions
//! - **sync**: Local folder ingestion
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod index;
pub mod services;
pub mod sync;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsiftError, Result};
pub use index::DocumentIndex;
pub use services::Services;
