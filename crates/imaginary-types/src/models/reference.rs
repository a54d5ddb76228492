//! Reference images and their element selections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which visual aspect of a reference image should influence generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceElement {
    Face,
    Body,
    Scene,
    Background,
    Style,
}

/// Set of selected elements; order irrelevant, duplicates impossible.
pub type ElementSet = BTreeSet<ReferenceElement>;

/// A user-supplied reference image, transport-ready.
///
/// Lives only in session state; at most one subject and one style reference
/// exist at a time and neither is ever persisted. Construction goes through
/// `imaginary-core`'s intake validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceImage {
    /// `data:` URL holding the base64-encoded payload.
    pub data_url: String,
    pub elements: ElementSet,
}

impl ReferenceImage {
    /// Whether the given element is selected on this reference.
    pub fn has_element(&self, element: ReferenceElement) -> bool {
        self.elements.contains(&element)
    }
}
