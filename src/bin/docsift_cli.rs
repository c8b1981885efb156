//! docsift CLI - command-line search over local folders
//!
//! Syncs folders into an in-memory index and runs one query against it.
//! Use this for scripting or quick lookups without starting the server.
//!
//! # Examples
//!
//! ```bash
//! # Search the folders listed in the config file
//! docsift-cli search "quarterly review"
//!
//! # Search an explicit folder
//! docsift-cli search invoice --folder ~/Documents/finance --source finance
//!
//! # Show configuration
//! docsift-cli show-config
//! ```

use clap::Parser;
use docsift::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
