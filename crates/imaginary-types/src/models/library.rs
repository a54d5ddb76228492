//! Persisted library rows: collections and generated images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined named grouping of saved images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A saved generated image; belongs to at most one collection, or none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryImage {
    pub id: Uuid,
    pub url: String,
    pub prompt: String,
    pub model: Option<String>,
    pub collection_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub is_favorite: Option<bool>,
}

/// Filter for listing library images. All clauses are conjunctive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageFilter {
    /// Restrict to one collection.
    pub collection_id: Option<Uuid>,
    /// Case-insensitive substring match against the saved prompt.
    pub search: Option<String>,
    /// Only rows whose favorite flag is set true.
    pub favorites_only: bool,
}

impl ImageFilter {
    pub fn is_empty(&self) -> bool {
        self.collection_id.is_none() && self.search.is_none() && !self.favorites_only
    }
}
