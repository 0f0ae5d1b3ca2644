//! Error types for the weather API layer.
//!
//! [`ApiError`] unifies all request-local failure modes into a single enum
//! that converts into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! variant is recoverable and leaves the store and registry unchanged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use weathercast_store::StoreError;

/// Errors that can occur while handling a weather API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was malformed, incomplete, or out of range.
    #[error("{0}")]
    Validation(String),

    /// The requested record was not found.
    #[error("{0}")]
    NotFound(String),

    /// A create collided with an existing observation timestamp.
    #[error("{0}")]
    Conflict(String),

    /// The path matched but the method is not supported there.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matched the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateObservation(_) => Self::Conflict(err.to_string()),
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
            StoreError::Internal(msg) => Self::Internal(msg.to_owned()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use weathercast_types::RecordId;

    use super::*;

    #[test]
    fn store_errors_map_to_the_right_variants() {
        let not_found = ApiError::from(StoreError::NotFound(RecordId::from("9")));
        assert!(matches!(not_found, ApiError::NotFound(_)));

        let conflict = ApiError::from(StoreError::DuplicateObservation(
            weathercast_types::ObservedAt::new("20240415", "10:15"),
        ));
        assert!(matches!(conflict, ApiError::Conflict(_)));
    }

    #[test]
    fn fallback_messages_match_the_wire_contract() {
        assert_eq!(ApiError::RouteNotFound.to_string(), "Route not found");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
    }
}
