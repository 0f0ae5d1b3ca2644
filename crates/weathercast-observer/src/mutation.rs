//! The mutation gateway: validated create/update against the store.
//!
//! Both operations follow the same shape: validate the draft, apply it
//! under the store's write lock, then notify every open observer with the
//! committed record. Any failure happens before the store is touched (or
//! inside the store, which rolls nothing in on failure), so an error
//! response always implies an unchanged store and no notification.

use tracing::debug;
use validator::Validate;
use weathercast_types::{RecordDraft, RecordId, WeatherRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// Create a new record from a deserialized draft.
///
/// Assigns the next id, appends the record, and pushes it to all open
/// observers. A duplicate observation timestamp surfaces as a conflict
/// with no store change and no push.
///
/// # Errors
///
/// [`ApiError::Validation`] on out-of-range fields,
/// [`ApiError::Conflict`] on a duplicate observation timestamp.
pub async fn create(state: &AppState, draft: RecordDraft) -> Result<WeatherRecord, ApiError> {
    validate(&draft)?;

    let record = {
        let mut store = state.store.write().await;
        store.insert(draft)?.clone()
    };

    let observers = state.broadcast(&record).await;
    debug!(id = %record.id, observers, "weather record created");

    Ok(record)
}

/// Replace every field except the id of an existing record.
///
/// The updated record is pushed to all open observers. Updates are exempt
/// from the duplicate-observation rule.
///
/// # Errors
///
/// [`ApiError::Validation`] on out-of-range fields,
/// [`ApiError::NotFound`] when no record carries `id`.
pub async fn update(
    state: &AppState,
    id: &RecordId,
    draft: RecordDraft,
) -> Result<WeatherRecord, ApiError> {
    validate(&draft)?;

    let record = {
        let mut store = state.store.write().await;
        store.update(id, draft)?.clone()
    };

    let observers = state.broadcast(&record).await;
    debug!(id = %record.id, observers, "weather record updated");

    Ok(record)
}

/// Field-level validation beyond what deserialization enforces.
fn validate(draft: &RecordDraft) -> Result<(), ApiError> {
    draft
        .validate()
        .map_err(|err| ApiError::Validation(format!("invalid weather payload: {err}")))
}

#[cfg(test)]
mod tests {
    use weathercast_types::{ObservedAt, Place};

    use super::*;

    fn draft(date: &str, time: &str) -> RecordDraft {
        RecordDraft {
            observed_at: ObservedAt::new(date, time),
            place: Place {
                name: String::from("Aarhus N"),
                latitude: 56.17,
                longitude: 10.22,
            },
            temperature: 13.1,
            humidity: 70,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_returns_the_record() {
        let state = AppState::default();

        let result = create(&state, draft("20240415", "10:15")).await;

        assert!(matches!(result, Ok(record) if record.id.as_str() == "1"));
        assert_eq!(state.store.read().await.len(), 1);
    }

    #[tokio::test]
    async fn create_conflict_leaves_store_and_observers_untouched() {
        let state = AppState::default();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let _ = state.observers.register(tx).await;

        let first = create(&state, draft("20240415", "10:15")).await;
        assert!(first.is_ok());
        // Drain the push for the first create.
        assert!(rx.recv().await.is_some());

        let second = create(&state, draft("20240415", "10:15")).await;
        assert!(matches!(second, Err(ApiError::Conflict(_))));
        assert_eq!(state.store.read().await.len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_fields() {
        let state = AppState::default();
        let mut bad = draft("20240415", "10:15");
        bad.humidity = 250;

        let result = create(&state, bad).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn update_notifies_observers_with_the_committed_record() {
        let state = AppState::default();
        let created = create(&state, draft("20240415", "10:15")).await;
        assert!(created.is_ok());

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let _ = state.observers.register(tx).await;

        let mut replacement = draft("20240416", "09:00");
        replacement.temperature = 99.9;
        let result = update(&state, &RecordId::from("1"), replacement).await;
        assert!(result.is_ok());

        let frame = rx.recv().await.unwrap_or_default();
        let pushed: Result<WeatherRecord, _> = serde_json::from_str(&frame);
        assert!(matches!(pushed, Ok(record) if record.id.as_str() == "1"));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let state = AppState::default();
        let result = update(&state, &RecordId::from("7"), draft("20240415", "10:15")).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
