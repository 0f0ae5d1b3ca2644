//! Weather API server entry point for the Weathercast service.
//!
//! Initializes structured logging, loads configuration from environment
//! variables, seeds the in-memory record store, and serves the REST API
//! plus the `WebSocket` live feed until the process is terminated.

mod config;
mod seed;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weathercast_observer::{start_server, AppState};
use weathercast_store::RecordStore;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot
/// bind to its address.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("weathercast-server starting");

    let config = config::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        "configuration loaded"
    );

    // Seed the store with the initial observations.
    let mut store = RecordStore::new();
    for draft in seed::seed_drafts() {
        if let Err(err) = store.insert(draft) {
            warn!("skipping seed record: {err}");
        }
    }
    info!(records = store.len(), "record store seeded");

    let state = Arc::new(AppState::new(store));
    start_server(&config, state).await?;

    Ok(())
}
