//! Application error type mapping to HTTP status codes and the
//! `{"error": "<message>"}` body format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use intervia_infra::report::ReportError;
use intervia_types::error::InterviewError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Interview engine errors.
    Interview(InterviewError),
    /// Generic internal error.
    Internal(String),
}

impl From<InterviewError> for AppError {
    fn from(e: InterviewError) -> Self {
        AppError::Interview(e)
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        tracing::error!(error = %e, "pdf export failed");
        AppError::Internal("Failed to export PDF".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Interview(InterviewError::NotFound) => {
                (StatusCode::NOT_FOUND, "Interview not found".to_string())
            }
            AppError::Interview(InterviewError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Interview(InterviewError::InvalidState(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Interview(InterviewError::Configuration(msg)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::from(InterviewError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            AppError::from(InterviewError::Validation("Answer is required".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_state_maps_to_400() {
        let response = AppError::from(InterviewError::InvalidState(
            "Interview is already complete".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_configuration_maps_to_500() {
        let response = AppError::from(InterviewError::Configuration(
            "Google API key not configured".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
