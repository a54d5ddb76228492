//! Prompt-improvement proxy handler.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use imaginary_core::gateway::ImproveMode;

use super::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ImprovePromptRequest {
    #[serde(default)]
    pub prompt: String,
    /// `"improve"` or `"enhance"`; anything else behaves like enhance.
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovePromptResponse {
    pub improved_prompt: String,
}

pub async fn improve_prompt(
    State(state): State<AppState>,
    Json(payload): Json<ImprovePromptRequest>,
) -> Result<Json<ImprovePromptResponse>, ApiError> {
    if payload.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("Prompt is required"));
    }

    let mode = ImproveMode::from_request_type(payload.mode.as_deref());
    info!("Improving prompt ({:?}): {} chars", mode, payload.prompt.len());

    let improved = state.gateway().improve_prompt(&payload.prompt, mode).await?;

    Ok(Json(ImprovePromptResponse { improved_prompt: improved }))
}
