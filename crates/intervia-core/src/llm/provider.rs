//! TextGenerator trait definition.
//!
//! This is the seam between the interview pipeline and the external
//! generative-text model. Uses native async fn in traits (RPITIT, Rust 2024
//! edition). Implementations live in intervia-infra (e.g., `GeminiProvider`).

use intervia_types::llm::{GenerationRequest, LlmError};

/// Trait for text-generation backends.
///
/// One operation: send a prompt, get raw text back. The pipeline owns
/// timeout and fallback policy; implementations perform a single call
/// with no internal retries.
pub trait TextGenerator: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Whether the provider has a usable credential.
    ///
    /// `start` surfaces a configuration error when this is false; every
    /// later call degrades to fallback content instead.
    fn is_configured(&self) -> bool;

    /// Send a generation request and receive the raw model text.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
