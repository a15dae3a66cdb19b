use thiserror::Error;

/// Errors related to interview session operations.
///
/// Only request-shape and session-existence problems become client-visible
/// errors; model and parsing failures are absorbed by the generation
/// pipeline and never appear here.
#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("interview not found")]
    NotFound,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl InterviewError {
    /// True when the error maps to a client-side (4xx) condition.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, InterviewError::Configuration(_))
    }
}
