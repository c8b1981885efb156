//! Core data types for the docsift service.
//!
//! This module defines the document record held by the index, the
//! upsert input, and the projections returned to callers (search
//! hits, excluded rows, statistics).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content and metadata supplied by a caller for one upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Unique document identifier
    #[serde(rename = "doc_id")]
    pub id: String,

    /// Display title
    pub title: String,

    /// Full text body searched against
    pub content: String,

    /// Thumbnail location, opaque to the index
    pub thumbnail_url: String,

    /// Origin system tag (e.g. "gdrive", "dropbox", "upload")
    pub source: String,

    /// Sub-location label (page or slide)
    pub page_or_slide: String,

    /// Soft-delete flag; deleted documents are never returned by search
    #[serde(default)]
    pub is_deleted: bool,
}

/// Who hid a document from search, and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub excluded_at: DateTime<Utc>,
    pub excluded_by: String,
}

/// One indexed unit of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub thumbnail_url: String,
    pub source: String,
    pub page_or_slide: String,
    pub is_deleted: bool,

    /// Absent unless an admin excluded the document
    pub exclusion: Option<Exclusion>,
}

impl DocumentRecord {
    /// Build the record stored for `input`, given the record it replaces.
    ///
    /// Content and metadata always come from `input`; the exclusion state
    /// is carried over from `previous` so that content updates never
    /// re-expose or re-hide a document.
    pub fn merge(previous: Option<&DocumentRecord>, input: DocumentInput) -> Self {
        Self {
            id: input.id,
            title: input.title,
            content: input.content,
            thumbnail_url: input.thumbnail_url,
            source: input.source,
            page_or_slide: input.page_or_slide,
            is_deleted: input.is_deleted,
            exclusion: previous.and_then(|p| p.exclusion.clone()),
        }
    }

    /// Whether search may return this record
    pub fn is_visible(&self) -> bool {
        !self.is_deleted && self.exclusion.is_none()
    }

    pub fn is_excluded(&self) -> bool {
        self.exclusion.is_some()
    }
}

/// Half-open `[start, end)` character range of one query occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPosition {
    pub start: usize,
    pub end: usize,
}

/// Search result for one matching document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub page_or_slide: String,
    pub source: String,

    /// Excerpt around the first occurrence, with every occurrence marked
    pub snippet: String,

    /// All occurrences in full-document character offsets, ascending
    pub hit_positions: Vec<HitPosition>,
}

/// Row returned by the excluded-documents listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedDocument {
    pub doc_id: String,
    pub title: String,
    pub source: String,

    /// Exclusion timestamp (RFC 3339)
    pub excluded_at: DateTime<Utc>,
    pub excluded_by: String,
    pub is_deleted: bool,
}

/// Document counts of an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// All records, regardless of visibility
    pub total: usize,

    /// Records search may return
    pub visible: usize,

    /// Records hidden by an exclusion
    pub excluded: usize,

    /// Records carrying the soft-delete flag
    pub deleted: usize,
}

/// Statistics from one folder sync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStats {
    /// Source tag applied to synced documents
    pub source: String,

    /// Number of files upserted
    pub files_synced: usize,

    /// Number of files skipped (unreadable or not UTF-8)
    pub files_skipped: usize,

    /// Previously synced documents whose files disappeared
    pub documents_deleted: usize,

    /// Sync duration in milliseconds
    pub duration_ms: u64,
}

/// Generic acknowledgement for mutating endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Document counts
    pub documents: IndexStats,
}
