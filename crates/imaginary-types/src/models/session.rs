//! Session-scoped models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated image in the in-session history strip.
///
/// History is ordered newest-first and vanishes on session end unless the
/// image is explicitly saved to the library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryImage {
    pub id: Uuid,
    pub url: String,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}
