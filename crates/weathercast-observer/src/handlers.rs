//! REST endpoint handlers for the weather API.
//!
//! Query handlers read from the shared
//! [`RecordStore`](weathercast_store::RecordStore) under a read lock;
//! mutations go through the [`mutation`](crate::mutation) gateway, which
//! also notifies live observers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Welcome message listing the API |
//! | `GET` | `/weather` | All records, insertion order |
//! | `GET` | `/weather/{id}` | Single record by id (digits) |
//! | `GET` | `/weather/date/{date}` | Records on a date (8 digits) |
//! | `GET` | `/weather/latest_three` | The 3 chronologically latest |
//! | `POST` | `/weather` | Create a record (id server-assigned) |
//! | `PUT` | `/weather/{id}` | Replace a record's fields |
//!
//! Route parameters carry the same digit constraints the dashboard client
//! relies on: a non-digit `{id}` or a `{date}` that is not exactly eight
//! digits is treated as an unmatched route, not a lookup miss.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use weathercast_types::{RecordDraft, RecordId, WeatherRecord};

use crate::error::ApiError;
use crate::mutation;
use crate::state::AppState;

/// Methods advertised on `OPTIONS` requests and 405 responses.
const ALLOWED_METHODS: &str = "GET, POST, PUT, OPTIONS";

// ---------------------------------------------------------------------------
// GET / -- welcome message
// ---------------------------------------------------------------------------

/// Serve the welcome message describing the API surface.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the Weather API! GET /weather for all records, \
                    /weather/{id} for one record, /weather/date/{date} for a day, \
                    /weather/latest_three for the three latest. POST /weather to \
                    create, PUT /weather/{id} to update, GET /weather/live for the \
                    live feed.",
    }))
}

// ---------------------------------------------------------------------------
// GET /weather -- all records
// ---------------------------------------------------------------------------

/// Return every record in insertion order.
pub async fn list_weather(State(state): State<Arc<AppState>>) -> Json<Vec<WeatherRecord>> {
    let store = state.store.read().await;
    Json(store.records().to_vec())
}

// ---------------------------------------------------------------------------
// GET /weather/{id} -- single record
// ---------------------------------------------------------------------------

/// Return the record carrying `id`.
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let id = parse_record_id(&id)?;

    let store = state.store.read().await;
    store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no weather record with id {id}")))
}

// ---------------------------------------------------------------------------
// GET /weather/date/{date} -- records on a date
// ---------------------------------------------------------------------------

/// Return every record whose observation date equals `date` exactly.
///
/// An empty array is a valid answer; only a malformed date key (not eight
/// digits) is rejected.
pub async fn list_weather_on_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError> {
    if date.len() != 8 || !is_digits(&date) {
        return Err(ApiError::RouteNotFound);
    }

    let store = state.store.read().await;
    let records = store
        .records_on_date(&date)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(records))
}

// ---------------------------------------------------------------------------
// GET /weather/latest_three -- chronologically latest records
// ---------------------------------------------------------------------------

/// Return the (at most) three chronologically latest records, newest
/// first.
pub async fn latest_three(State(state): State<Arc<AppState>>) -> Json<Vec<WeatherRecord>> {
    let store = state.store.read().await;
    Json(store.latest(3).into_iter().cloned().collect())
}

// ---------------------------------------------------------------------------
// POST /weather -- create a record
// ---------------------------------------------------------------------------

/// Create a new record from the request body.
///
/// The id is always server-assigned; an `ID` field in the payload is
/// ignored. A duplicate observation timestamp yields 409.
pub async fn create_weather(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RecordDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = payload.map_err(reject_payload)?;
    let record = mutation::create(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

// ---------------------------------------------------------------------------
// PUT /weather/{id} -- update a record
// ---------------------------------------------------------------------------

/// Replace every field except the id of the record carrying `id`.
pub async fn update_weather(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<RecordDraft>, JsonRejection>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let id = parse_record_id(&id)?;
    let Json(draft) = payload.map_err(reject_payload)?;
    let record = mutation::update(&state, &id, draft).await?;
    Ok(Json(record))
}

// ---------------------------------------------------------------------------
// OPTIONS + router fallbacks
// ---------------------------------------------------------------------------

/// Answer an `OPTIONS` request: no body, allowed methods in the `Allow`
/// header. CORS headers are added by the router-wide layer.
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, ALLOWED_METHODS)])
}

/// Router fallback for paths no route matches.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Router fallback for matched paths with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a digits-only record id from the request path.
///
/// Only numeric ids are routable; anything else behaves as an unmatched
/// route rather than a missing record.
fn parse_record_id(raw: &str) -> Result<RecordId, ApiError> {
    if raw.is_empty() || !is_digits(raw) {
        return Err(ApiError::RouteNotFound);
    }
    Ok(RecordId::from(raw))
}

/// Whether `s` consists solely of ASCII digits.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Turn a body-extraction rejection into a validation error carrying the
/// parse detail.
fn reject_payload(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(format!("invalid weather payload: {}", rejection.body_text()))
}
