//! Application state wiring the engine to its concrete infrastructure.
//!
//! AppState holds the engine instance used by both CLI and REST API.
//! The engine is generic over provider/store traits, but AppState pins
//! it to the concrete infra implementations.

use std::sync::Arc;

use intervia_core::engine::InterviewEngine;
use intervia_infra::config::AppConfig;
use intervia_infra::llm::GeminiProvider;
use intervia_infra::store::MemorySessionStore;

/// Concrete engine type pinned to the infra implementations.
pub type ConcreteEngine = InterviewEngine<GeminiProvider, MemorySessionStore>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConcreteEngine>,
    pub web_dir: String,
}

impl AppState {
    /// Wire the engine from resolved configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let provider = GeminiProvider::new(config.api_key, config.model);
        let store = MemorySessionStore::new();
        let engine = InterviewEngine::new(provider, store, config.llm_timeout);

        Self {
            engine: Arc::new(engine),
            web_dir: config.web_dir,
        }
    }
}
