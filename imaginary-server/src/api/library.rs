//! Image library handlers: collections and saved images.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use imaginary_core::library::LibraryRepository;
use imaginary_types::error::LibraryError;
use imaginary_types::models::{Collection, ImageFilter, LibraryImage};

use super::ApiError;
use crate::state::AppState;

fn repo(state: &AppState) -> Result<&Arc<dyn LibraryRepository>, ApiError> {
    state.repository().ok_or_else(|| LibraryError::Unavailable.into())
}

/// Distinguish an absent field from an explicit `null`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<Vec<Collection>>, ApiError> {
    let collections = repo(&state)?.list_collections().await?;
    Ok(Json(collections))
}

#[derive(Deserialize)]
pub struct CollectionRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CollectionRequest>,
) -> Result<Json<Collection>, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Collection name is required"));
    }

    let collection =
        repo(&state)?.create_collection(name.to_string(), payload.description).await?;
    Ok(Json(collection))
}

pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollectionRequest>,
) -> Result<Json<Collection>, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Collection name is required"));
    }

    let collection =
        repo(&state)?.update_collection(id, name.to_string(), payload.description).await?;
    Ok(Json(collection))
}

pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<bool>, ApiError> {
    repo(&state)?.delete_collection(id).await?;
    Ok(Json(true))
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ImageListQuery {
    pub collection_id: Option<Uuid>,
    pub search: Option<String>,
    #[serde(default)]
    pub favorites: bool,
}

pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ImageListQuery>,
) -> Result<Json<Vec<LibraryImage>>, ApiError> {
    let filter = ImageFilter {
        collection_id: query.collection_id,
        search: query.search.filter(|s| !s.trim().is_empty()),
        favorites_only: query.favorites,
    };

    let images = repo(&state)?.list_images(&filter).await?;
    Ok(Json(images))
}

#[derive(Deserialize)]
pub struct SaveImageRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
}

pub async fn save_image(
    State(state): State<AppState>,
    Json(payload): Json<SaveImageRequest>,
) -> Result<Json<LibraryImage>, ApiError> {
    if payload.url.trim().is_empty() {
        return Err(ApiError::bad_request("Image URL is required"));
    }

    let image = repo(&state)?.insert_image(payload.url, payload.prompt, payload.model).await?;
    Ok(Json(image))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageRequest {
    /// `null` moves the image out of its collection; absent leaves it alone.
    #[serde(default, deserialize_with = "double_option")]
    pub collection_id: Option<Option<Uuid>>,
    pub is_favorite: Option<bool>,
}

pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateImageRequest>,
) -> Result<Json<bool>, ApiError> {
    if payload.collection_id.is_none() && payload.is_favorite.is_none() {
        return Err(ApiError::bad_request("Nothing to update"));
    }

    let repo = repo(&state)?;
    if let Some(collection_id) = payload.collection_id {
        repo.set_image_collection(id, collection_id).await?;
    }
    if let Some(is_favorite) = payload.is_favorite {
        repo.set_image_favorite(id, is_favorite).await?;
    }

    Ok(Json(true))
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Assign,
    Delete,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImageRequest {
    pub action: BulkAction,
    #[serde(default)]
    pub ids: Vec<Uuid>,
    pub collection_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct BulkImageResponse {
    pub affected: u64,
}

pub async fn bulk_update_images(
    State(state): State<AppState>,
    Json(payload): Json<BulkImageRequest>,
) -> Result<Json<BulkImageResponse>, ApiError> {
    if payload.ids.is_empty() {
        return Err(ApiError::bad_request("Image ids are required"));
    }

    let repo = repo(&state)?;
    let affected = match payload.action {
        BulkAction::Assign => repo.assign_images(&payload.ids, payload.collection_id).await?,
        BulkAction::Delete => repo.delete_images(&payload.ids).await?,
    };

    Ok(Json(BulkImageResponse { affected }))
}

pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<bool>, ApiError> {
    repo(&state)?.delete_image(id).await?;
    Ok(Json(true))
}
