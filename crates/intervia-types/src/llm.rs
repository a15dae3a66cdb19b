//! Model gateway request/response types for Intervia.
//!
//! These types model the seam between the interview pipeline and the
//! external generative-text model: a single-prompt generation request and
//! the errors a provider can surface.

use serde::{Deserialize, Serialize};

/// A single text-generation request with fixed sampling parameters.
///
/// The interview pipeline always sends one prompt and reads back one block
/// of text; there is no conversation history at this seam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    /// Sampling temperature used for every interview task.
    pub const TEMPERATURE: f64 = 0.7;

    /// Output-length cap used for every interview task.
    pub const MAX_OUTPUT_TOKENS: u32 = 2048;

    /// Build a request with the fixed interview sampling parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: Self::TEMPERATURE,
            max_output_tokens: Self::MAX_OUTPUT_TOKENS,
        }
    }
}

/// Errors from model provider operations.
///
/// Every variant is recoverable: the generation pipeline converts any of
/// these into deterministic fallback content rather than failing the
/// interview.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("no API credential configured")]
    MissingCredential,

    #[error("request timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_fixed_sampling() {
        let req = GenerationRequest::new("hello");
        assert_eq!(req.temperature, 0.7);
        assert_eq!(req.max_output_tokens, 2048);
        assert_eq!(req.prompt, "hello");
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 500".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 500");
        assert_eq!(
            LlmError::Timeout { elapsed_ms: 30000 }.to_string(),
            "request timed out after 30000ms"
        );
    }
}
