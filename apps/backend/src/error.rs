//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use review_core::SessionError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Session(SessionError::InsufficientDueCards { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_due_cards")
            }
            ApiError::Session(SessionError::DuplicateOutcome { .. })
            | ApiError::Session(SessionError::AlreadyEvaluated) => {
                (StatusCode::CONFLICT, "session_conflict")
            }
            // A round outside the built table is a broken invariant, not
            // a client mistake.
            ApiError::Session(SessionError::MissingRoundMapping { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "session_error")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_due_cards_status() {
        let error = ApiError::Session(SessionError::InsufficientDueCards { available: 2 });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_missing_round_mapping_status() {
        let error = ApiError::Session(SessionError::MissingRoundMapping { round: 99 });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_duplicate_outcome_status() {
        let error = ApiError::Session(SessionError::DuplicateOutcome { round: 4 });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_status() {
        let error = ApiError::NotFound("deck 123".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        let error = ApiError::Conflict("deck busy".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_display_session() {
        let error = ApiError::Session(SessionError::InsufficientDueCards { available: 1 });
        assert_eq!(
            error.to_string(),
            "Session error: not enough due cards to start a session: 1 available, 3 required"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = ApiError::NotFound("Deck abc".to_string());
        assert_eq!(error.to_string(), "Not found: Deck abc");
    }
}
