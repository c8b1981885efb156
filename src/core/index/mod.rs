//! Document index: storage, exclusion workflow and substring search.
//!
//! # Architecture
//!
//! - **DocumentIndex**: the shared store, one read-write lock over all
//!   records
//! - **QueryMatcher**: literal case-insensitive matching, snippets and
//!   highlighting

mod matcher;
mod store;

pub use matcher::{QueryMatcher, SnippetOptions, DEFAULT_SNIPPET_WINDOW};
pub use store::DocumentIndex;
