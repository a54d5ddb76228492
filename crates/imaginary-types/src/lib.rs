//! # Imaginary Types
//!
//! Core types, models, and error definitions for the Imaginary studio.
//!
//! This crate provides the foundational type system for the Imaginary
//! ecosystem:
//!
//! - **`error`** - Typed error hierarchy for the gateway proxies, reference
//!   intake, and the image library
//! - **`models`** - Domain models (catalogs, reference images, history,
//!   library rows)
//! - **`protocol`** - AI-gateway chat-completion message types
//!
//! ## Architecture Role
//!
//! `imaginary-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     imaginary-types (this crate)
//!             │
//!             ▼
//!      imaginary-core
//!             │
//!             ▼
//!     imaginary-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for API responses
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{GatewayError, IntakeError, LibraryError, Result, TypedError};

// Re-export core model types
pub use models::{
    AspectRatio, Collection, EditCategory, EditOption, ElementSet, HistoryImage, ImageFilter,
    ImageModel, LibraryImage, ModelTier, ReferenceElement, ReferenceImage, SpeedClass,
};
