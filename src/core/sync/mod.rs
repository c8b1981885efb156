//! Local folder sync.
//!
//! Converts the text files of a folder into index upserts, one document
//! per file. Document ids are derived from the source tag and the
//! sanitized path relative to the folder, so re-syncing the same folder
//! updates documents in place (and keeps their exclusions).
//!
//! File reads happen before each upsert; the index lock is never held
//! across I/O.

mod walker;

pub use walker::FileWalker;

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::SyncConfig;
use crate::core::error::{DocsiftError, Result};
use crate::core::index::DocumentIndex;
use crate::core::types::{DocumentInput, SyncStats};

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
///
/// Path separators are replaced too, so nested files map to a flat id.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Deterministic document id for a synced file
pub fn document_id(source: &str, relative_path: &str) -> String {
    format!("{}:{}", source, sanitize_filename(relative_path))
}

/// Syncs folders into a [`DocumentIndex`]
#[derive(Debug, Clone)]
pub struct FolderSync {
    walker: FileWalker,
}

impl FolderSync {
    /// Create a folder sync with explicit walker settings
    pub fn new(walker: FileWalker) -> Self {
        Self { walker }
    }

    /// Create a folder sync from the `[sync]` configuration section
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        let walker = FileWalker::new(
            &config.include_patterns,
            &config.exclude_patterns,
            config.max_file_size_mb,
        )?;
        Ok(Self::new(walker))
    }

    /// Upsert every matching file below `root` under the `source` tag.
    ///
    /// Documents previously synced under `source` whose files are gone
    /// are re-upserted with the soft-delete flag set.
    ///
    /// # Errors
    ///
    /// - `InvalidPath`: `root` does not exist or is not a directory
    pub fn sync(&self, index: &DocumentIndex, root: &Path, source: &str) -> Result<SyncStats> {
        let start = Instant::now();

        if !root.is_dir() {
            return Err(DocsiftError::InvalidPath(format!(
                "Sync folder is not a directory: {}",
                root.display()
            )));
        }

        let mut seen = HashSet::new();
        let mut files_synced = 0;
        let mut files_skipped = 0;

        for path in self.walker.collect_files(root) {
            let relative = path
                .strip_prefix(root)
                .unwrap_or(path.as_path())
                .to_string_lossy()
                .replace('\\', "/");

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Skipping unreadable file {:?}: {}", path, e);
                    files_skipped += 1;
                    continue;
                }
            };

            let id = document_id(source, &relative);
            let title = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| relative.clone());

            index.upsert(DocumentInput {
                thumbnail_url: format!("/thumb/{id}"),
                id: id.clone(),
                title,
                content,
                source: source.to_string(),
                page_or_slide: "p1".to_string(),
                is_deleted: false,
            });

            if !seen.insert(id.clone()) {
                tracing::warn!(
                    source = %source,
                    doc_id = %id,
                    "File {:?} maps to an id already synced this pass and replaces it",
                    path
                );
            }
            files_synced += 1;
        }

        let documents_deleted = mark_missing_deleted(index, source, &seen);

        let stats = SyncStats {
            source: source.to_string(),
            files_synced,
            files_skipped,
            documents_deleted,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            source = %stats.source,
            files_synced = stats.files_synced,
            files_skipped = stats.files_skipped,
            documents_deleted = stats.documents_deleted,
            duration_ms = stats.duration_ms,
            "Folder sync completed"
        );

        Ok(stats)
    }
}

/// Soft-delete synced documents of `source` that were not seen this pass
fn mark_missing_deleted(index: &DocumentIndex, source: &str, seen: &HashSet<String>) -> usize {
    let prefix = format!("{source}:");

    index
        .ids_for_source(source)
        .into_iter()
        .filter(|id| id.starts_with(&prefix) && !seen.contains(id))
        .filter(|id| index.mark_deleted(id))
        .count()
}
