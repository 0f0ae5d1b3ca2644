//! Weather API server for the Weathercast service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for querying weather records (all, by id, by date,
//!   latest three) and mutating them (create, update)
//! - **`WebSocket` endpoint** (`/weather/live`) that pushes every
//!   successful mutation to all connected observers and echoes peer data
//!   frames back
//!
//! # Architecture
//!
//! The record store lives in the shared [`AppState`] behind a
//! `tokio::sync::RwLock`: reads run concurrently with reads, while a
//! mutation holds the write lock for the whole (synchronous, bounded)
//! store operation, so no request ever observes a half-applied create or
//! update. Live connections register in an [`ObserverRegistry`] keyed by
//! connection id; after a mutation commits, the notifier serializes the
//! record once and fans it out to every registered observer, fire and
//! forget.
//!
//! [`AppState`]: state::AppState
//! [`ObserverRegistry`]: registry::ObserverRegistry

pub mod error;
pub mod handlers;
pub mod mutation;
pub mod registry;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use registry::ObserverRegistry;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
