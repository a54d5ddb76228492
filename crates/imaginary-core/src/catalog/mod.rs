//! Static option catalogs.
//!
//! All tables are defined at compile time. Catalog-definition order is
//! meaningful: the composer iterates edit options in this order no matter
//! when they were selected, and the first aspect ratio / model entry is the
//! default selection.

mod aspect_ratios;
mod edits;
mod models;

pub use aspect_ratios::{aspect_ratio_by_id, default_aspect_ratio, format_clause, ASPECT_RATIOS};
pub use edits::{edit_option_by_id, selected_in_catalog_order, EDIT_OPTIONS};
pub use models::{
    default_model, model_by_id, resolve_backend_model, IMAGE_MODELS, TEXT_BACKEND_MODEL,
};
