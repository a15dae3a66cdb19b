//! Environment configuration for Intervia.
//!
//! The original deployment was configured through environment variables,
//! so that stays the source of truth here. Malformed values log a warning
//! and fall back to the default rather than failing startup.

use std::time::Duration;

use secrecy::SecretString;

use crate::llm::gemini::DEFAULT_MODEL;

/// Floor for the model-call timeout; anything lower defeats the point of
/// calling the model at all.
const MIN_LLM_TIMEOUT_MS: u64 = 1_000;

/// Default bound on one model call.
const DEFAULT_LLM_TIMEOUT_MS: u64 = 30_000;

/// Runtime configuration resolved from the environment.
pub struct AppConfig {
    /// Credential for the Gemini API. Absent means `start` requests fail
    /// with a configuration error while fallback content still serves the
    /// rest of the pipeline.
    pub api_key: Option<SecretString>,
    /// Model identifier (`INTERVIA_MODEL`).
    pub model: String,
    /// Bound on one model call (`INTERVIA_LLM_TIMEOUT_MS`).
    pub llm_timeout: Duration,
    /// Directory of static web assets to serve, if it exists
    /// (`INTERVIA_WEB_DIR`).
    pub web_dir: String,
}

impl AppConfig {
    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);

        let model =
            std::env::var("INTERVIA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let llm_timeout = parse_timeout_ms(std::env::var("INTERVIA_LLM_TIMEOUT_MS").ok().as_deref());

        let web_dir = std::env::var("INTERVIA_WEB_DIR").unwrap_or_else(|_| "public".to_string());

        Self {
            api_key,
            model,
            llm_timeout,
            web_dir,
        }
    }
}

/// Parse a millisecond timeout value, applying the default on absence or
/// garbage and the floor on too-small values.
fn parse_timeout_ms(raw: Option<&str>) -> Duration {
    let ms = match raw {
        None => DEFAULT_LLM_TIMEOUT_MS,
        Some(value) => match value.trim().parse::<u64>() {
            Ok(parsed) => parsed.max(MIN_LLM_TIMEOUT_MS),
            Err(_) => {
                tracing::warn!(value, "invalid INTERVIA_LLM_TIMEOUT_MS, using default");
                DEFAULT_LLM_TIMEOUT_MS
            }
        },
    };
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_default_when_unset() {
        assert_eq!(parse_timeout_ms(None), Duration::from_millis(30_000));
    }

    #[test]
    fn test_timeout_parses_valid_value() {
        assert_eq!(
            parse_timeout_ms(Some("5000")),
            Duration::from_millis(5_000)
        );
    }

    #[test]
    fn test_timeout_enforces_floor() {
        assert_eq!(parse_timeout_ms(Some("10")), Duration::from_millis(1_000));
    }

    #[test]
    fn test_timeout_falls_back_on_garbage() {
        assert_eq!(
            parse_timeout_ms(Some("fast please")),
            Duration::from_millis(30_000)
        );
    }
}
