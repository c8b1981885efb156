//! CLI adapter for docsift
//!
//! Provides a command-line interface over the core index: sync local
//! folders into a fresh index, search it, and inspect configuration.
//! This module is parallel to `http/` - both depend on `core/` but not
//! on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// docsift - highlighted substring search over documents
///
/// Sync local folders into an in-memory index and search them with
/// case-insensitive literal matching.
#[derive(Parser, Debug)]
#[command(name = "docsift-cli")]
#[command(version)]
#[command(about = "Highlighted substring search over documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync folders into a fresh index and search it
    Search(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsift-cli completions bash > ~/.local/share/bash-completion/completions/docsift-cli
    ///   zsh:   docsift-cli completions zsh > ~/.zfunc/_docsift-cli
    ///   fish:  docsift-cli completions fish > ~/.config/fish/completions/docsift-cli.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Sync progress goes to stderr; keep it quiet unless RUST_LOG asks
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docsift=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    // Load configuration
    let config = Config::load()?;

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, config, cli.format).await,
        Commands::ShowConfig(args) => {
            let services = Arc::new(Services::new(config));
            commands::config::execute(args, &services, cli.format).await
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
