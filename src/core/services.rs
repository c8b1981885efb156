//! Unified service container for docsift
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::index::DocumentIndex;
use crate::core::sync::FolderSync;
use crate::core::types::SyncStats;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access. One container
/// is built per service instance and handed to every request handler.
#[derive(Clone)]
pub struct Services {
    /// The shared document index
    pub index: Arc<DocumentIndex>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let index = Arc::new(DocumentIndex::with_options(
            config.search.snippet_options(),
        ));

        Self {
            index,
            config: Arc::new(config),
        }
    }

    /// Create a folder sync using the `[sync]` settings
    pub fn folder_sync(&self) -> Result<FolderSync> {
        FolderSync::from_config(&self.config.sync)
    }

    /// Sync every configured folder into the index
    ///
    /// A folder that fails to sync is logged and skipped; the others
    /// still run.
    pub fn sync_configured_folders(&self) -> Result<Vec<SyncStats>> {
        let sync = self.folder_sync()?;
        let mut all_stats = Vec::with_capacity(self.config.sync.folders.len());

        for folder in &self.config.sync.folders {
            match sync.sync(&self.index, &folder.path, &folder.source) {
                Ok(stats) => all_stats.push(stats),
                Err(e) => {
                    tracing::warn!(source = %folder.source, "Folder sync failed: {}", e);
                }
            }
        }

        Ok(all_stats)
    }
}
