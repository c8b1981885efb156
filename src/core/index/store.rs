//! The shared in-memory document index.
//!
//! All records live in one `HashMap` guarded by a single read-write
//! lock. Mutations take the write lock, search and listing take the
//! read lock, so every operation is atomic with respect to the others.
//! No I/O happens while the lock is held.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::core::error::{DocsiftError, Result};
use crate::core::index::matcher::{QueryMatcher, SnippetOptions};
use crate::core::types::{
    DocumentInput, DocumentRecord, ExcludedDocument, Exclusion, IndexStats, SearchHit,
};

/// In-memory document index with exclusion workflow
#[derive(Debug, Default)]
pub struct DocumentIndex {
    documents: RwLock<HashMap<String, DocumentRecord>>,
    snippet: SnippetOptions,
}

impl DocumentIndex {
    /// Create an empty index with default snippet options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with custom snippet options
    pub fn with_options(snippet: SnippetOptions) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            snippet,
        }
    }

    /// Snippet options used by [`DocumentIndex::search`]
    pub fn snippet_options(&self) -> &SnippetOptions {
        &self.snippet
    }

    /// Insert or replace a document.
    ///
    /// Content and metadata are replaced wholesale; an existing
    /// exclusion survives the update.
    pub fn upsert(&self, input: DocumentInput) {
        let mut documents = self.documents.write();
        let record = DocumentRecord::merge(documents.get(&input.id), input);

        tracing::debug!(
            doc_id = %record.id,
            source = %record.source,
            excluded = record.is_excluded(),
            is_deleted = record.is_deleted,
            "Document upserted"
        );

        documents.insert(record.id.clone(), record);
    }

    /// Hide a document from search.
    ///
    /// Re-excluding an excluded document overwrites timestamp and actor.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied`: `is_admin` is false (checked first)
    /// - `DocumentNotFound`: no document with this id
    pub fn exclude(&self, id: &str, actor: &str, is_admin: bool) -> Result<()> {
        require_admin(is_admin)?;

        let mut documents = self.documents.write();
        let record = documents
            .get_mut(id)
            .ok_or_else(|| DocsiftError::DocumentNotFound(id.to_string()))?;

        record.exclusion = Some(Exclusion {
            excluded_at: Utc::now(),
            excluded_by: actor.to_string(),
        });

        tracing::info!(doc_id = %id, actor = %actor, "Document excluded");
        Ok(())
    }

    /// Make an excluded document searchable again.
    ///
    /// Including a document that is not excluded is a no-op.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied`: `is_admin` is false (checked first)
    /// - `DocumentNotFound`: no document with this id
    pub fn include(&self, id: &str, is_admin: bool) -> Result<()> {
        require_admin(is_admin)?;

        let mut documents = self.documents.write();
        let record = documents
            .get_mut(id)
            .ok_or_else(|| DocsiftError::DocumentNotFound(id.to_string()))?;

        record.exclusion = None;

        tracing::info!(doc_id = %id, "Document included");
        Ok(())
    }

    /// List excluded documents, most recently excluded first.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied`: `is_admin` is false
    pub fn list_excluded(&self, is_admin: bool) -> Result<Vec<ExcludedDocument>> {
        require_admin(is_admin)?;

        let documents = self.documents.read();
        let mut rows: Vec<ExcludedDocument> = documents
            .values()
            .filter_map(|record| {
                record.exclusion.as_ref().map(|exclusion| ExcludedDocument {
                    doc_id: record.id.clone(),
                    title: record.title.clone(),
                    source: record.source.clone(),
                    excluded_at: exclusion.excluded_at,
                    excluded_by: exclusion.excluded_by.clone(),
                    is_deleted: record.is_deleted,
                })
            })
            .collect();
        drop(documents);

        rows.sort_by(|a, b| match b.excluded_at.cmp(&a.excluded_at) {
            Ordering::Equal => a.doc_id.cmp(&b.doc_id),
            other => other,
        });

        Ok(rows)
    }

    /// Case-insensitive literal substring search over visible documents.
    ///
    /// An empty query returns no results. The order of results across
    /// documents is unspecified.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = match QueryMatcher::new(query) {
            Ok(matcher) => matcher,
            Err(e) => {
                tracing::warn!(query = %query, "Unsearchable query: {}", e);
                return Vec::new();
            }
        };

        let documents = self.documents.read();
        let hits: Vec<SearchHit> = documents
            .values()
            .filter(|record| record.is_visible())
            .filter_map(|record| self.to_hit(&matcher, record))
            .collect();

        tracing::debug!(query = %query, results = hits.len(), "Search completed");
        hits
    }

    /// Set the soft-delete flag of `id` under a single write lock.
    ///
    /// Content, metadata and exclusion are left untouched. Returns
    /// `false` when the record is missing or already deleted.
    pub fn mark_deleted(&self, id: &str) -> bool {
        let mut documents = self.documents.write();
        match documents.get_mut(id) {
            Some(record) if !record.is_deleted => {
                record.is_deleted = true;
                tracing::debug!(doc_id = %id, "Document marked deleted");
                true
            }
            _ => false,
        }
    }

    /// Clone of the record stored under `id`
    pub fn get(&self, id: &str) -> Option<DocumentRecord> {
        self.documents.read().get(id).cloned()
    }

    /// Ids of all records whose source tag equals `source`
    pub fn ids_for_source(&self, source: &str) -> Vec<String> {
        self.documents
            .read()
            .values()
            .filter(|record| record.source == source)
            .map(|record| record.id.clone())
            .collect()
    }

    /// Number of stored records, including hidden ones
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Count records by visibility
    pub fn stats(&self) -> IndexStats {
        let documents = self.documents.read();
        documents
            .values()
            .fold(IndexStats::default(), |mut stats, record| {
                stats.total += 1;
                if record.is_visible() {
                    stats.visible += 1;
                }
                if record.is_excluded() {
                    stats.excluded += 1;
                }
                if record.is_deleted {
                    stats.deleted += 1;
                }
                stats
            })
    }

    fn to_hit(&self, matcher: &QueryMatcher, record: &DocumentRecord) -> Option<SearchHit> {
        let hit_positions = matcher.find_hits(&record.content);
        let first = *hit_positions.first()?;

        Some(SearchHit {
            doc_id: record.id.clone(),
            title: record.title.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            page_or_slide: record.page_or_slide.clone(),
            source: record.source.clone(),
            snippet: matcher.snippet(&record.content, first, &self.snippet),
            hit_positions,
        })
    }
}

fn require_admin(is_admin: bool) -> Result<()> {
    if is_admin {
        Ok(())
    } else {
        Err(DocsiftError::admin_required())
    }
}
