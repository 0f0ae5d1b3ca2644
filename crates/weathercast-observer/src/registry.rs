//! Registry of live streaming connections.
//!
//! Every open `WebSocket` observer is registered here under a fresh
//! [`ObserverId`], paired with the sending half of its outbound channel.
//! The registry never owns the connection itself: the socket task holds
//! the receiving half and the transport, and removes its entry on the one
//! terminal transition (close frame, peer disconnect, or transport
//! failure).

use std::collections::BTreeMap;

use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tracing::debug;
use weathercast_types::ObserverId;

/// Outbound frame handle for one observer.
///
/// Unbounded so a push never blocks the mutation path; the socket task
/// drains the queue as fast as the peer accepts frames.
pub type ObserverSender = mpsc::UnboundedSender<String>;

/// The set of currently-open streaming connections, keyed by connection
/// id.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    /// Open connections. Entries are added on upgrade and removed only
    /// when a connection reaches its terminal state.
    connections: Mutex<BTreeMap<ObserverId, ObserverSender>>,
}

impl ObserverRegistry {
    /// Create a new empty registry.
    pub const fn new() -> Self {
        Self {
            connections: Mutex::const_new(BTreeMap::new()),
        }
    }

    /// Register a newly upgraded connection and return its fresh id.
    pub async fn register(&self, sender: ObserverSender) -> ObserverId {
        let id = ObserverId::new();
        self.connections.lock().await.insert(id, sender);
        id
    }

    /// Remove a connection that reached its terminal state.
    ///
    /// Returns whether an entry was actually removed; a second removal of
    /// the same id is a no-op.
    pub async fn deregister(&self, id: ObserverId) -> bool {
        self.connections.lock().await.remove(&id).is_some()
    }

    /// Push one already-serialized frame to every open connection.
    ///
    /// Best-effort and fire-and-forget: an observer whose channel is gone
    /// (its socket task is shutting down) is skipped without affecting the
    /// others. Returns the number of observers the frame was enqueued to.
    pub async fn broadcast(&self, frame: &str) -> usize {
        let connections = self.connections.lock().await;

        let mut delivered = 0_usize;
        for (id, sender) in connections.iter() {
            if sender.send(frame.to_owned()).is_err() {
                // The socket task dropped its receiver; it will deregister
                // itself on exit.
                debug!(observer = %id, "skipping push to closing observer");
            } else {
                delivered = delivered.saturating_add(1);
            }
        }

        delivered
    }

    /// The number of currently registered connections.
    pub async fn len(&self) -> usize {
        self.connections.lock().await.len()
    }

    /// Whether no connections are registered.
    pub async fn is_empty(&self) -> bool {
        self.connections.lock().await.is_empty()
    }
}
