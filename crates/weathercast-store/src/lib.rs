//! In-memory weather record store for the Weathercast service.
//!
//! The [`RecordStore`] owns the ordered collection of weather records for
//! the current process. It assigns ids, enforces observation-timestamp
//! uniqueness on insert, and serves the read projections behind the query
//! endpoints.
//!
//! # Design
//!
//! - **Append/update only**: records are never deleted; the store never
//!   shrinks.
//! - **Server-assigned ids**: the next id is derived from the records
//!   already present, never taken from a caller.
//! - **Synchronous and bounded**: every operation is a plain in-memory
//!   scan or append. Concurrency discipline (who may call when) belongs to
//!   the owner of the store, not the store itself.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
