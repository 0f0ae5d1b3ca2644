//! Axum router construction for the weather API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the weather API server.
///
/// The router includes:
/// - `GET /` -- welcome message
/// - `GET /weather`, `POST /weather` -- list and create records
/// - `GET /weather/{id}`, `PUT /weather/{id}` -- read and update one record
/// - `GET /weather/date/{date}` -- records on one date
/// - `GET /weather/latest_three` -- the three chronologically latest
/// - `GET /weather/live` -- `WebSocket` live feed
///
/// Every route also answers `OPTIONS`; unmatched paths yield
/// `404 {"error":"Route not found"}` and matched paths with an
/// unsupported method yield `405 {"error":"Method not allowed"}`.
///
/// CORS is configured to allow any origin, so every response carries the
/// allow-all-origins header the dashboard client expects.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Welcome message
        .route("/", get(handlers::index).options(handlers::preflight))
        // REST API
        .route(
            "/weather",
            get(handlers::list_weather)
                .post(handlers::create_weather)
                .options(handlers::preflight),
        )
        .route(
            "/weather/latest_three",
            get(handlers::latest_three).options(handlers::preflight),
        )
        .route(
            "/weather/date/{date}",
            get(handlers::list_weather_on_date).options(handlers::preflight),
        )
        // WebSocket
        .route(
            "/weather/live",
            get(ws::weather_live).options(handlers::preflight),
        )
        .route(
            "/weather/{id}",
            get(handlers::get_weather)
                .put(handlers::update_weather)
                .options(handlers::preflight),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
