//! GeminiProvider -- concrete [`TextGenerator`] implementation for the
//! Google Generative Language API.
//!
//! Sends requests to `models/{model}:generateContent` with the API key in
//! the `x-goog-api-key` header. The key is wrapped in
//! [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output; constructing the provider without a key is allowed, in which
//! case `generate` fails with [`LlmError::MissingCredential`] and the
//! pipeline falls back to offline content.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use intervia_core::llm::provider::TextGenerator;
use intervia_observe::genai_attrs;
use intervia_types::llm::{GenerationRequest, LlmError};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Google Gemini text-generation provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// * `api_key` - API key wrapped in SecretString; `None` leaves the
    ///   provider unconfigured
    /// * `model` - model identifier (e.g., "gemini-2.0-flash")
    pub fn new(api_key: Option<SecretString>, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The model identifier this provider targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full generateContent URL for this provider's model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn to_gemini_request(&self, request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug to prevent accidental
// exposure of internal state alongside the credential.

impl TextGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_ref().ok_or(LlmError::MissingCredential)?;
        let body = self.to_gemini_request(request);

        // GenAI semantic convention span: "{operation} {model}"
        let span = tracing::info_span!(
            "generate_content",
            gen_ai.operation.name = genai_attrs::OP_GENERATE_CONTENT,
            gen_ai.provider.name = genai_attrs::PROVIDER_GEMINI,
            gen_ai.request.model = %self.model,
            gen_ai.request.temperature = request.temperature,
            gen_ai.request.max_tokens = request.max_output_tokens,
        );

        self.call_api(api_key, &body).instrument(span).await
    }
}

impl GeminiProvider {
    async fn call_api(
        &self,
        api_key: &SecretString,
        body: &GeminiRequest,
    ) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let text = gemini_resp
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::Deserialization(
                "response contained no candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}

// --- Wire types ---

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            Some(SecretString::from("test-key-not-real")),
            DEFAULT_MODEL.to_string(),
        )
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(make_provider().name(), "gemini");
    }

    #[test]
    fn test_configured_with_and_without_key() {
        assert!(make_provider().is_configured());
        let bare = GeminiProvider::new(None, DEFAULT_MODEL.to_string());
        assert!(!bare.is_configured());
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_with_missing_credential() {
        let bare = GeminiProvider::new(None, DEFAULT_MODEL.to_string());
        let result = bare.generate(&GenerationRequest::new("hello")).await;
        assert!(matches!(result, Err(LlmError::MissingCredential)));
    }

    #[test]
    fn test_url_uses_model_and_base() {
        let provider = make_provider().with_base_url("http://localhost:9090".to_string());
        assert_eq!(
            provider.url(),
            "http://localhost:9090/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_request_serialization_shape() {
        let provider = make_provider();
        let body = provider.to_gemini_request(&GenerationRequest::new("Ask me something"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Ask me something");
        assert_eq!(json["generationConfig"]["temperature"], 0.7);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_response_deserialization_joins_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Tell me "}, {"text": "about yourself."}]}
            }]
        }"#;
        let resp: GeminiResponse = serde_json::from_str(raw).unwrap();
        let text: String = resp.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Tell me about yourself.");
    }
}
