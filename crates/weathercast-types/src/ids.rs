//! Typed identifiers for weather records and live observers.
//!
//! [`RecordId`] wraps the server-assigned record identifier. The wire
//! format is a string, but ids are assigned as consecutive integers; the
//! numeric view is fallible so that foreign or legacy ids survive a store
//! round-trip without breaking id assignment.
//!
//! [`ObserverId`] identifies one live streaming connection. It uses UUID v7
//! (time-ordered), is never serialized to clients, and is never reused.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Server-assigned identifier of a weather record.
///
/// Opaque and string-typed on the wire. Newly assigned ids are decimal
/// integers, strictly increasing for the lifetime of a store; ids that do
/// not parse as integers are tolerated but never produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RecordId(pub String);

impl RecordId {
    /// Build an id from an assigned sequence number.
    pub fn from_number(n: u64) -> Self {
        Self(n.to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value of the id, if it parses as a decimal integer.
    ///
    /// Ids that fail to parse yield `None` and are skipped during next-id
    /// derivation rather than treated as errors.
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Return the inner [`String`] value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Unique identifier for one live streaming connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(pub Uuid);

impl ObserverId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
