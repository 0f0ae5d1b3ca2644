//! Shared application state for the weather API server.
//!
//! [`AppState`] owns the two process-wide resources: the record store and
//! the registry of live observers. Handlers reach both through Axum's
//! `State` extractor (wrapped in [`Arc`](std::sync::Arc)).
//!
//! The store sits behind a `RwLock` so query handlers may read
//! concurrently while every mutation holds the write lock for the whole
//! store operation. Store operations are synchronous and bounded; the
//! lock is never held across network I/O.

use tokio::sync::RwLock;
use tracing::warn;
use weathercast_store::RecordStore;
use weathercast_types::WeatherRecord;

use crate::registry::ObserverRegistry;

/// Shared state for the Axum application.
#[derive(Debug)]
pub struct AppState {
    /// The process-wide record store.
    pub store: RwLock<RecordStore>,
    /// The set of currently-open live connections.
    pub observers: ObserverRegistry,
}

impl AppState {
    /// Create application state around an existing (possibly seeded)
    /// store.
    pub const fn new(store: RecordStore) -> Self {
        Self {
            store: RwLock::const_new(store),
            observers: ObserverRegistry::new(),
        }
    }

    /// Push a committed record to every open observer.
    ///
    /// The record is serialized once; the same frame goes to every
    /// connection. Delivery is best-effort: a failure to serialize or to
    /// reach one observer is logged and swallowed, never surfaced to the
    /// mutation that triggered the push. Returns the number of observers
    /// the frame was enqueued to.
    pub async fn broadcast(&self, record: &WeatherRecord) -> usize {
        let frame = match serde_json::to_string(record) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(id = %record.id, "failed to serialize record push: {err}");
                return 0;
            }
        };

        self.observers.broadcast(&frame).await
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RecordStore::new())
    }
}
