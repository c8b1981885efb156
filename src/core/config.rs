//! Configuration management for the docsift service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsiftError, Result};
use crate::core::index::{SnippetOptions, DEFAULT_SNIPPET_WINDOW};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Search and snippet configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Characters kept on each side of the first hit (not bytes!)
    #[serde(default = "default_snippet_window")]
    pub snippet_window: usize,

    /// Maximum query string length accepted over HTTP
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    #[serde(default = "default_highlight_open")]
    pub highlight_open: String,

    #[serde(default = "default_highlight_close")]
    pub highlight_close: String,

    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

/// Request headers carrying the admin claim and actor
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Header whose value `true` (any case) grants the admin claim
    #[serde(default = "default_admin_header")]
    pub admin_header: String,

    /// Header naming the acting administrator
    #[serde(default = "default_actor_header")]
    pub actor_header: String,

    /// Actor recorded when the actor header is missing
    #[serde(default = "default_actor")]
    pub default_actor: String,
}

/// Folder sync configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Folders synced at server start
    #[serde(default)]
    pub folders: Vec<SyncFolder>,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// One folder to sync and the source tag its documents get
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyncFolder {
    pub path: PathBuf,

    #[serde(default = "default_source")]
    pub source: String,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_snippet_window() -> usize {
    DEFAULT_SNIPPET_WINDOW
}

fn default_max_query_length() -> usize {
    500
}

fn default_highlight_open() -> String {
    "[".to_string()
}

fn default_highlight_close() -> String {
    "]".to_string()
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_admin_header() -> String {
    "X-Admin".to_string()
}

fn default_actor_header() -> String {
    "X-Actor".to_string()
}

fn default_actor() -> String {
    "admin".to_string()
}

fn default_source() -> String {
    "local".to_string()
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.txt".to_string(), "*.md".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
    ]
}

fn default_max_file_size() -> usize {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snippet_window: default_snippet_window(),
            max_query_length: default_max_query_length(),
            highlight_open: default_highlight_open(),
            highlight_close: default_highlight_close(),
            ellipsis: default_ellipsis(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_header: default_admin_header(),
            actor_header: default_actor_header(),
            default_actor: default_actor(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl SearchConfig {
    /// Snippet options for the document index
    pub fn snippet_options(&self) -> SnippetOptions {
        SnippetOptions {
            window: self.snippet_window,
            highlight_open: self.highlight_open.clone(),
            highlight_close: self.highlight_close.clone(),
            ellipsis: self.ellipsis.clone(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsiftError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// TOML lookup order:
    /// 1. DOCSIFT_CONFIG env var
    /// 2. User config file (~/.config/docsift/config.toml)
    /// 3. ./docsift.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCSIFT_CONFIG") {
            Self::from_file(config_path)?
        } else if let Some(user_config) = user_config_file().filter(|p| p.exists()) {
            Self::from_file(user_config)?
        } else if Path::new("docsift.toml").exists() {
            Self::from_file("docsift.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("DOCSIFT_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("DOCSIFT_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(window) = env::var("DOCSIFT_SNIPPET_WINDOW") {
            if let Ok(w) = window.parse() {
                self.search.snippet_window = w;
            }
        }
        if let Ok(max_query_len) = env::var("DOCSIFT_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(DocsiftError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(DocsiftError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.highlight_open.is_empty() || self.search.highlight_close.is_empty() {
            return Err(DocsiftError::ConfigError(
                "Highlight markers cannot be empty".to_string(),
            ));
        }

        if self.auth.admin_header.is_empty() || self.auth.actor_header.is_empty() {
            return Err(DocsiftError::ConfigError(
                "Auth header names cannot be empty".to_string(),
            ));
        }

        if self.sync.max_file_size_mb == 0 {
            return Err(DocsiftError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        let mut sources = HashSet::new();
        for folder in &self.sync.folders {
            if folder.source.is_empty() {
                return Err(DocsiftError::ConfigError(format!(
                    "Sync folder {:?} has an empty source tag",
                    folder.path
                )));
            }
            // Re-sync soft-deletes by source, so two folders cannot share one
            if !sources.insert(folder.source.as_str()) {
                return Err(DocsiftError::ConfigError(format!(
                    "Duplicate sync source tag '{}'",
                    folder.source
                )));
            }
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Snippet window: {} chars", self.search.snippet_window);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!(
            "  Highlight markers: {} {}",
            self.search.highlight_open,
            self.search.highlight_close
        );
        tracing::info!("  Admin header: {}", self.auth.admin_header);
        tracing::info!("  Actor header: {}", self.auth.actor_header);
        tracing::info!("  Sync folders: {}", self.sync.folders.len());
        for folder in &self.sync.folders {
            tracing::info!("    {} <- {:?}", folder.source, folder.path);
        }
        tracing::info!("  Max file size: {} MB", self.sync.max_file_size_mb);
    }
}

/// User-level config file path (`$XDG_CONFIG_HOME/docsift/config.toml`)
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docsift").join("config.toml"))
}
