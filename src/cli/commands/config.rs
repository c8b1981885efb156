//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::user_config_file;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show auth header settings
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: Option<String>,
    pub listen: String,
    pub search: SearchSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthSettings>,
    pub sync: SyncSettings,
}

#[derive(Debug, Serialize)]
pub struct SearchSettings {
    pub snippet_window: usize,
    pub max_query_length: usize,
    pub highlight: String,
}

#[derive(Debug, Serialize)]
pub struct AuthSettings {
    pub admin_header: String,
    pub actor_header: String,
    pub default_actor: String,
}

#[derive(Debug, Serialize)]
pub struct SyncSettings {
    pub folders: Vec<String>,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let config_file = user_config_file()
        .filter(|p| p.exists())
        .map(|p| p.to_string_lossy().into_owned());

    let response = ConfigResponse {
        config_file,
        listen: format!("{}:{}", config.server.host, config.server.port),
        search: SearchSettings {
            snippet_window: config.search.snippet_window,
            max_query_length: config.search.max_query_length,
            highlight: format!(
                "{}...{}",
                config.search.highlight_open, config.search.highlight_close
            ),
        },
        auth: args.all.then(|| AuthSettings {
            admin_header: config.auth.admin_header.clone(),
            actor_header: config.auth.actor_header.clone(),
            default_actor: config.auth.default_actor.clone(),
        }),
        sync: SyncSettings {
            folders: config
                .sync
                .folders
                .iter()
                .map(|f| format!("{} <- {}", f.source, f.path.display()))
                .collect(),
            include_patterns: config.sync.include_patterns.clone(),
            exclude_patterns: config.sync.exclude_patterns.clone(),
            max_file_size_mb: config.sync.max_file_size_mb,
        },
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            println!(
                "  config_file: {}",
                response.config_file.as_deref().unwrap_or("(defaults)")
            );
            println!("  listen: {}", response.listen);
            println!("  search:");
            println!("    snippet_window: {}", response.search.snippet_window);
            println!("    max_query_length: {}", response.search.max_query_length);
            println!("    highlight: {}", response.search.highlight);
            if let Some(auth) = &response.auth {
                println!("  auth:");
                println!("    admin_header: {}", auth.admin_header);
                println!("    actor_header: {}", auth.actor_header);
                println!("    default_actor: {}", auth.default_actor);
            }
            println!("  sync:");
            if response.sync.folders.is_empty() {
                println!("    folders: {}", colors::dim("(none)"));
            } else {
                println!("    folders:");
                for folder in &response.sync.folders {
                    println!("      {}", colors::file_path(folder));
                }
            }
            println!("    include: {:?}", response.sync.include_patterns);
            println!("    exclude: {:?}", response.sync.exclude_patterns);
            println!("    max_file_size_mb: {}", response.sync.max_file_size_mb);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
