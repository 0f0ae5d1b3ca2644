//! Error types for the record store.

use weathercast_types::{ObservedAt, RecordId};

/// Errors produced by [`RecordStore`](crate::RecordStore) mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with the same observation timestamp already exists.
    #[error("a record observed at {0} already exists")]
    DuplicateObservation(ObservedAt),

    /// No record carries the requested id.
    #[error("no weather record with id {0}")]
    NotFound(RecordId),

    /// An internal invariant was violated.
    #[error("internal store error: {0}")]
    Internal(&'static str),
}
