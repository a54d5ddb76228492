//! Image library errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the collection/image store.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum LibraryError {
    /// Row does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Underlying store failure
    #[error("Database error: {0}")]
    Database(String),

    /// No database is configured for this deployment
    #[error("Image library is not configured")]
    Unavailable,
}

impl LibraryError {
    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Database(_) => 500,
            Self::Unavailable => 503,
        }
    }
}
