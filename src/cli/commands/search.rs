//! Search command - sync folders into a fresh index and search it

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::{Config, SyncFolder};
use crate::core::error::DocsiftError;
use crate::core::index::{QueryMatcher, SnippetOptions};
use crate::core::services::Services;
use crate::core::types::SearchHit;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (literal, case-insensitive)
    pub query: String,

    /// Folder to sync before searching (repeatable; defaults to the configured folders)
    #[arg(long, short = 'f')]
    pub folder: Vec<PathBuf>,

    /// Source tag for --folder documents; numbered when several folders are given
    #[arg(long, short = 's', default_value = "local")]
    pub source: String,

    /// Only show document ids (no snippets)
    #[arg(long)]
    pub ids_only: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub documents_indexed: usize,
    pub total_results: usize,
    pub results: Vec<SearchHit>,
}

/// Replace the configured sync folders with the ones given on the command line
fn folders_from_args(args: &SearchArgs) -> Vec<SyncFolder> {
    let numbered = args.folder.len() > 1;
    args.folder
        .iter()
        .enumerate()
        .map(|(i, path)| SyncFolder {
            path: path.clone(),
            source: if numbered {
                format!("{}-{}", args.source, i + 1)
            } else {
                args.source.clone()
            },
        })
        .collect()
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.folder.is_empty() {
        config.sync.folders = folders_from_args(&args);
        config.validate()?;
    }

    if config.sync.folders.is_empty() {
        return Err(DocsiftError::InvalidRequest(
            "No folders to search. Pass --folder or add [[sync.folders]] to the config file."
                .to_string(),
        )
        .into());
    }

    let max_len = config.search.max_query_length;
    if args.query.chars().count() > max_len {
        return Err(DocsiftError::InvalidQuery(format!("Query exceeds {max_len} characters")).into());
    }

    let services = Services::new(config);
    let synced = services.sync_configured_folders()?;
    if synced.len() < services.config.sync.folders.len() {
        output::print_warning("Some folders could not be synced, see log output above");
    }

    let mut results = services.index.search(&args.query);
    // Stable output for the terminal
    results.sort_by(|a, b| a.doc_id.cmp(&b.doc_id));

    let output = SearchResponseOutput {
        query: args.query.clone(),
        documents_indexed: services.index.stats().visible,
        total_results: results.len(),
        results,
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No results found for '{}' in {} document(s)",
                    colors::label(&args.query),
                    colors::number(&output.documents_indexed.to_string())
                );
            } else {
                println!(
                    "Found {} result(s) in {} document(s):\n",
                    colors::number(&output.total_results.to_string()),
                    colors::number(&output.documents_indexed.to_string())
                );

                // Rebuild snippets without markers and color the spans instead
                let matcher = QueryMatcher::new(&args.query)?;
                let plain = SnippetOptions {
                    highlight_open: String::new(),
                    highlight_close: String::new(),
                    ..services.index.snippet_options().clone()
                };
                for hit in &output.results {
                    if args.ids_only {
                        println!("{}", colors::doc_id(&hit.doc_id));
                        continue;
                    }
                    println!(
                        "{} {} {}",
                        colors::doc_id(&hit.doc_id),
                        colors::label(&hit.title),
                        colors::dim(&format!(
                            "({}, {} hit(s))",
                            hit.page_or_slide,
                            hit.hit_positions.len()
                        ))
                    );
                    let text = match (services.index.get(&hit.doc_id), hit.hit_positions.first()) {
                        (Some(record), Some(first)) => {
                            matcher.snippet(&record.content, *first, &plain)
                        }
                        _ => hit.snippet.clone(),
                    };
                    println!(
                        "    {}",
                        output::render_snippet(&text, &matcher.find_hits(&text))
                    );
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
