//! docsift - in-memory document index with highlighted search
//!
//! Stores short text documents (pages, slides, files), answers
//! case-insensitive literal substring queries with highlighted
//! snippets, and lets administrators hide documents from search
//! without deleting them.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - index (document store, matching, snippets)
//!   - sync (folder ingestion)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, error mapping
//!
//! - **cli**: command-line adapter (depends on core)
//!   - commands, output

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocsiftError, Result};
pub use core::index::DocumentIndex;
pub use core::services::Services;
pub use core::types::*;
