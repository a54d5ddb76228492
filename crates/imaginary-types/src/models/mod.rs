//! Core domain models for Imaginary.
//!
//! This module contains all shared data structures used across the Imaginary
//! ecosystem.

mod catalog;
mod library;
mod reference;
mod session;

// Re-export all models
pub use catalog::{AspectRatio, EditCategory, EditOption, ImageModel, ModelTier, SpeedClass};
pub use library::{Collection, ImageFilter, LibraryImage};
pub use reference::{ElementSet, ReferenceElement, ReferenceImage};
pub use session::HistoryImage;
