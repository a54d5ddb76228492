//! Asset-upload proxy handler.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use imaginary_core::media::DEFAULT_FOLDER;
use imaginary_types::error::GatewayError;

use super::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UploadImageRequest {
    /// Data URL or bare base64 payload.
    #[serde(default)]
    pub image: String,
    pub folder: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    pub url: String,
    pub public_id: String,
    pub width: u32,
    pub height: u32,
}

pub async fn upload_image(
    State(state): State<AppState>,
    Json(payload): Json<UploadImageRequest>,
) -> Result<Json<UploadImageResponse>, ApiError> {
    if payload.image.trim().is_empty() {
        return Err(ApiError::bad_request("Image data is required"));
    }

    let uploader = state.uploader().ok_or(GatewayError::MissingCredentials {
        service: "Media CDN".to_string(),
    })?;

    let folder = payload.folder.as_deref().unwrap_or(DEFAULT_FOLDER);
    info!("Uploading image to CDN folder {}...", folder);

    let asset = uploader.upload(&payload.image, folder).await?;

    Ok(Json(UploadImageResponse {
        url: asset.url,
        public_id: asset.public_id,
        width: asset.width,
        height: asset.height,
    }))
}
