//! Conversational interview handler.
//!
//! POST /api/interview/{id}/chat - One turn of the chat-driven flow.
//! A session is created lazily on first contact; the `"start"` message
//! begins the question cycle.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::AppError;
use crate::state::AppState;

/// Body for POST /api/interview/{id}/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/interview/{id}/chat - Exchange one chat turn.
pub async fn chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    let reply = state.engine.chat(&id, &req.message).await?;
    Ok(Json(json!({ "reply": reply })))
}
