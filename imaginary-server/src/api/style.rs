//! Style-extraction proxy handler.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStyleRequest {
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStyleResponse {
    pub style_prompt: String,
}

pub async fn extract_style(
    State(state): State<AppState>,
    Json(payload): Json<ExtractStyleRequest>,
) -> Result<Json<ExtractStyleResponse>, ApiError> {
    if payload.image_url.trim().is_empty() {
        return Err(ApiError::bad_request("Image URL is required"));
    }

    info!("Extracting description from image...");

    let description = state.gateway().describe_image(&payload.image_url).await?;

    Ok(Json(ExtractStyleResponse { style_prompt: description }))
}
