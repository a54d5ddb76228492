//! Typed error definitions for Imaginary.
//!
//! This module provides a structured error hierarchy with specific error types
//! for different domains. All errors are designed to be:
//!
//! - **Serializable** for API responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod gateway;
mod intake;
mod library;

pub use gateway::GatewayError;
pub use intake::IntakeError;
pub use library::LibraryError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
///
/// Use this when you need a single error type that can represent
/// any Imaginary error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a gateway proxy error
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Wraps a reference-image intake error
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    /// Wraps an image library error
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),
}

impl TypedError {
    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Gateway(e) => e.http_status_code(),
            Self::Intake(_) => 400,
            Self::Library(e) => e.http_status_code(),
        }
    }
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Library(LibraryError::NotFound {
            entity: "collection".to_string(),
            id: "test-123".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Library"));
        assert!(json.contains("test-123"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = GatewayError::Upstream { status: 503, message: "overloaded".to_string() };

        let msg = format!("{}", err);
        assert!(msg.contains("503"));
    }

    #[test]
    fn test_status_dispatch() {
        assert_eq!(TypedError::Gateway(GatewayError::RateLimited).http_status_code(), 429);
        assert_eq!(TypedError::Library(LibraryError::Unavailable).http_status_code(), 503);
        assert_eq!(
            TypedError::Intake(IntakeError::NotADataUrl).http_status_code(),
            400
        );
    }
}
