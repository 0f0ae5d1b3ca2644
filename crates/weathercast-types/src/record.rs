//! The weather record, its natural key, and inbound drafts.
//!
//! Wire field names follow the dashboard client's JSON contract (`ID`,
//! `Tidspunkt (dato og klokkeslæt)`, `Sted`, `Temperatur`,
//! `Luftfugtighed`); the Rust field names stay idiomatic and the mapping
//! lives in serde attributes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::ids::RecordId;

/// Where an observation was taken.
///
/// A value type with no identity of its own; the same place may appear on
/// any number of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Place {
    /// Human-readable place name.
    #[serde(rename = "Navn")]
    pub name: String,
    /// Latitude in decimal degrees.
    #[serde(rename = "Lat")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(rename = "Lon")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// The compound observation timestamp, a record's natural key.
///
/// Both components are opaque strings compared lexically, date first. Two
/// records may never share the same (date, time) pair; comparison is exact,
/// with no punctuation normalization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ObservedAt {
    /// Observation date, `YYYYMMDD` by convention.
    #[serde(rename = "Dato")]
    pub date: String,
    /// Observation time of day, `HH:MM` by convention.
    #[serde(rename = "Klokkeslæt")]
    pub time: String,
}

impl ObservedAt {
    /// Build a key from its date and time components.
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

impl core::fmt::Display for ObservedAt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

/// One stored weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WeatherRecord {
    /// Server-assigned identifier; never taken from a client payload.
    #[serde(rename = "ID")]
    pub id: RecordId,
    /// When the observation was taken; unique across the store.
    #[serde(rename = "Tidspunkt (dato og klokkeslæt)")]
    pub observed_at: ObservedAt,
    /// Where the observation was taken.
    #[serde(rename = "Sted")]
    pub place: Place,
    /// Measured temperature in degrees Celsius.
    #[serde(rename = "Temperatur")]
    pub temperature: f64,
    /// Measured relative humidity in percent.
    #[serde(rename = "Luftfugtighed")]
    pub humidity: i64,
}

/// An inbound record payload: every [`WeatherRecord`] field except the id.
///
/// Clients never choose ids, so create and update bodies both deserialize
/// into this shape. A stray `ID` key in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RecordDraft {
    /// When the observation was taken.
    #[serde(rename = "Tidspunkt (dato og klokkeslæt)")]
    pub observed_at: ObservedAt,
    /// Where the observation was taken.
    #[serde(rename = "Sted")]
    #[validate(nested)]
    pub place: Place,
    /// Measured temperature in degrees Celsius.
    #[serde(rename = "Temperatur")]
    pub temperature: f64,
    /// Measured relative humidity in percent.
    #[serde(rename = "Luftfugtighed")]
    #[validate(range(min = 0, max = 100))]
    pub humidity: i64,
}

impl RecordDraft {
    /// Promote the draft to a stored record under a server-assigned id.
    pub fn into_record(self, id: RecordId) -> WeatherRecord {
        WeatherRecord {
            id,
            observed_at: self.observed_at,
            place: self.place,
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}
