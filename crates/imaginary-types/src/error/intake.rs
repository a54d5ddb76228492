//! Reference-image intake errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures while accepting a user-supplied reference image.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum IntakeError {
    /// The payload is not a `data:` URL
    #[error("Reference image must be a data URL")]
    NotADataUrl,

    /// The declared media type is not an image
    #[error("Unsupported reference media type: {media_type}")]
    UnsupportedMediaType { media_type: String },

    /// The decoded payload exceeds the size ceiling
    #[error("Reference image is {size_bytes} bytes; the limit is {limit_bytes}")]
    TooLarge { size_bytes: usize, limit_bytes: usize },

    /// The base64 payload could not be decoded
    #[error("Reference image payload is not valid base64")]
    InvalidEncoding,
}
