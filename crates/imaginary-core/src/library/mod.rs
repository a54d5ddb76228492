//! Image library storage: the repository trait and its Postgres backend.
//!
//! Every operation is a single statement; the store's own constraints are
//! the only consistency mechanism (deleting a collection nulls member
//! images' `collection_id` through the foreign key, nothing more).

mod postgres;
mod schema;

pub use postgres::PgLibraryRepository;
pub use schema::ensure_schema;

use async_trait::async_trait;
use imaginary_types::error::LibraryError;
use imaginary_types::models::{Collection, ImageFilter, LibraryImage};
use uuid::Uuid;

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Storage abstraction over the collections/images store.
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    async fn list_collections(&self) -> LibraryResult<Vec<Collection>>;
    async fn create_collection(
        &self,
        name: String,
        description: Option<String>,
    ) -> LibraryResult<Collection>;
    async fn update_collection(
        &self,
        id: Uuid,
        name: String,
        description: Option<String>,
    ) -> LibraryResult<Collection>;
    async fn delete_collection(&self, id: Uuid) -> LibraryResult<()>;

    async fn list_images(&self, filter: &ImageFilter) -> LibraryResult<Vec<LibraryImage>>;
    async fn insert_image(
        &self,
        url: String,
        prompt: String,
        model: Option<String>,
    ) -> LibraryResult<LibraryImage>;
    async fn set_image_collection(
        &self,
        id: Uuid,
        collection_id: Option<Uuid>,
    ) -> LibraryResult<()>;
    async fn set_image_favorite(&self, id: Uuid, is_favorite: bool) -> LibraryResult<()>;
    /// Move a set of images into (or out of) a collection; returns the
    /// number of rows touched.
    async fn assign_images(&self, ids: &[Uuid], collection_id: Option<Uuid>) -> LibraryResult<u64>;
    /// Delete a set of images; returns the number of rows removed.
    async fn delete_images(&self, ids: &[Uuid]) -> LibraryResult<u64>;
    async fn delete_image(&self, id: Uuid) -> LibraryResult<()>;
}
