//! Generation proxy handler.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use imaginary_core::gateway::GenerateOptions;

use super::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
    /// Subject reference as a data URL.
    pub reference_image: Option<String>,
    /// Style reference as a data URL.
    pub style_image: Option<String>,
    pub subject_influence: Option<f64>,
    pub style_influence: Option<f64>,
    // Accepted for the wire contract; the composer already folds the ratio
    // into the prompt text, so these are not forwarded upstream.
    pub aspect_ratio: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    pub image: String,
    pub model: String,
}

pub async fn generate_image(
    State(state): State<AppState>,
    Json(payload): Json<GenerateImageRequest>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    if payload.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("Prompt is required"));
    }

    info!(
        "Generating image: prompt={} chars, subject={}, style={}, ratio={:?} ({:?}x{:?})",
        payload.prompt.len(),
        payload.reference_image.is_some(),
        payload.style_image.is_some(),
        payload.aspect_ratio,
        payload.width,
        payload.height,
    );

    let generated = state
        .gateway()
        .generate_image(GenerateOptions {
            prompt: payload.prompt,
            model: payload.model,
            reference_image: payload.reference_image,
            style_image: payload.style_image,
            subject_influence: payload.subject_influence,
            style_influence: payload.style_influence,
        })
        .await?;

    Ok(Json(GenerateImageResponse { image: generated.url, model: generated.model }))
}
