//! docsift HTTP server entry point
//!
//! Starts the REST API server over an in-memory document index.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docsift::core::config::Config;
use docsift::core::services::Services;
use docsift::http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docsift=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting docsift");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;

    // Log configuration details
    config.log_config();

    // Create shared services and ingest configured folders
    let services = Arc::new(Services::new(config.clone()));
    for stats in services.sync_configured_folders()? {
        tracing::info!(
            source = %stats.source,
            files_synced = stats.files_synced,
            files_skipped = stats.files_skipped,
            documents_deleted = stats.documents_deleted,
            duration_ms = stats.duration_ms,
            "Folder synced"
        );
    }

    // Build the API router
    let app = http::router(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}
