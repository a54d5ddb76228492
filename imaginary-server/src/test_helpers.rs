//! Test helpers for imaginary-server unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use imaginary_core::gateway::GatewayClient;
use imaginary_core::library::{LibraryRepository, LibraryResult};
use imaginary_types::error::LibraryError;
use imaginary_types::models::{Collection, ImageFilter, LibraryImage};

use crate::state::AppState;

/// Minimal `AppState`: no gateway key, no uploader, no repository.
pub fn bare_app_state() -> AppState {
    // Unroutable base URL; tests never reach the network because the
    // credential check fires first.
    let gateway = GatewayClient::new("http://127.0.0.1:9", None);
    AppState::with_components(gateway, None, None)
}

/// `AppState` backed by an in-memory library repository.
pub fn app_state_with_library() -> (AppState, Arc<MemoryLibraryRepository>) {
    let repo = Arc::new(MemoryLibraryRepository::default());
    let gateway = GatewayClient::new("http://127.0.0.1:9", None);
    let state = AppState::with_components(gateway, None, Some(repo.clone()));
    (state, repo)
}

/// In-memory stand-in for the Postgres repository, mirroring its
/// single-statement semantics (including collection-delete nulling member
/// images' collection id).
#[derive(Default)]
pub struct MemoryLibraryRepository {
    collections: Mutex<Vec<Collection>>,
    images: Mutex<Vec<LibraryImage>>,
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().expect("test repository lock poisoned")
}

#[async_trait]
impl LibraryRepository for MemoryLibraryRepository {
    async fn list_collections(&self) -> LibraryResult<Vec<Collection>> {
        let mut collections = lock(&self.collections).clone();
        collections.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(collections)
    }

    async fn create_collection(
        &self,
        name: String,
        description: Option<String>,
    ) -> LibraryResult<Collection> {
        let collection =
            Collection { id: Uuid::new_v4(), name, description, created_at: Utc::now() };
        lock(&self.collections).push(collection.clone());
        Ok(collection)
    }

    async fn update_collection(
        &self,
        id: Uuid,
        name: String,
        description: Option<String>,
    ) -> LibraryResult<Collection> {
        let mut collections = lock(&self.collections);
        let collection = collections.iter_mut().find(|c| c.id == id).ok_or_else(|| {
            LibraryError::NotFound { entity: "collection".to_string(), id: id.to_string() }
        })?;
        collection.name = name;
        collection.description = description;
        Ok(collection.clone())
    }

    async fn delete_collection(&self, id: Uuid) -> LibraryResult<()> {
        let mut collections = lock(&self.collections);
        let before = collections.len();
        collections.retain(|c| c.id != id);
        if collections.len() == before {
            return Err(LibraryError::NotFound {
                entity: "collection".to_string(),
                id: id.to_string(),
            });
        }
        for image in lock(&self.images).iter_mut() {
            if image.collection_id == Some(id) {
                image.collection_id = None;
            }
        }
        Ok(())
    }

    async fn list_images(&self, filter: &ImageFilter) -> LibraryResult<Vec<LibraryImage>> {
        let mut images: Vec<LibraryImage> = lock(&self.images)
            .iter()
            .filter(|i| {
                filter.collection_id.map_or(true, |cid| i.collection_id == Some(cid))
            })
            .filter(|i| {
                filter.search.as_ref().map_or(true, |s| {
                    i.prompt.to_lowercase().contains(&s.to_lowercase())
                })
            })
            .filter(|i| !filter.favorites_only || i.is_favorite == Some(true))
            .cloned()
            .collect();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(images)
    }

    async fn insert_image(
        &self,
        url: String,
        prompt: String,
        model: Option<String>,
    ) -> LibraryResult<LibraryImage> {
        let image = LibraryImage {
            id: Uuid::new_v4(),
            url,
            prompt,
            model,
            collection_id: None,
            created_at: Utc::now(),
            is_favorite: None,
        };
        lock(&self.images).push(image.clone());
        Ok(image)
    }

    async fn set_image_collection(
        &self,
        id: Uuid,
        collection_id: Option<Uuid>,
    ) -> LibraryResult<()> {
        let mut images = lock(&self.images);
        let image = images.iter_mut().find(|i| i.id == id).ok_or_else(|| {
            LibraryError::NotFound { entity: "image".to_string(), id: id.to_string() }
        })?;
        image.collection_id = collection_id;
        Ok(())
    }

    async fn set_image_favorite(&self, id: Uuid, is_favorite: bool) -> LibraryResult<()> {
        let mut images = lock(&self.images);
        let image = images.iter_mut().find(|i| i.id == id).ok_or_else(|| {
            LibraryError::NotFound { entity: "image".to_string(), id: id.to_string() }
        })?;
        image.is_favorite = Some(is_favorite);
        Ok(())
    }

    async fn assign_images(&self, ids: &[Uuid], collection_id: Option<Uuid>) -> LibraryResult<u64> {
        let mut affected = 0;
        for image in lock(&self.images).iter_mut() {
            if ids.contains(&image.id) {
                image.collection_id = collection_id;
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete_images(&self, ids: &[Uuid]) -> LibraryResult<u64> {
        let mut images = lock(&self.images);
        let before = images.len();
        images.retain(|i| !ids.contains(&i.id));
        Ok((before - images.len()) as u64)
    }

    async fn delete_image(&self, id: Uuid) -> LibraryResult<()> {
        let mut images = lock(&self.images);
        let before = images.len();
        images.retain(|i| i.id != id);
        if images.len() == before {
            return Err(LibraryError::NotFound { entity: "image".to_string(), id: id.to_string() });
        }
        Ok(())
    }
}
