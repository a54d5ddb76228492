//! Catalog entry schemas: edit options, aspect ratios, AI models.
//!
//! The catalogs themselves are compile-time tables in `imaginary-core`;
//! these are the row shapes. Every field is always present (unused ones
//! carry an empty default), and localization is an open map of
//! `(language tag, label)` pairs rather than a fixed per-language field.

use serde::Serialize;

/// Category of a prompt edit option.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EditCategory {
    ArtStyle,
    Lighting,
    Effects,
    Environment,
    Camera,
    Quality,
}

impl EditCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ArtStyle => "Art Style",
            Self::Lighting => "Lighting",
            Self::Effects => "Effects",
            Self::Environment => "Environment",
            Self::Camera => "Camera",
            Self::Quality => "Quality",
        }
    }

    /// All categories in panel display order.
    pub fn all() -> &'static [EditCategory] {
        &[
            Self::ArtStyle,
            Self::Lighting,
            Self::Effects,
            Self::Environment,
            Self::Camera,
            Self::Quality,
        ]
    }
}

/// A reusable prompt fragment toggled from the edit panel.
///
/// Catalog-definition order is the composition order; the display layer is
/// free to show selections in insertion order instead.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EditOption {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Localization map; empty when no translation exists.
    pub localized: &'static [(&'static str, &'static str)],
    pub prompt_fragment: &'static str,
    pub category: EditCategory,
}

impl EditOption {
    /// Label for the given language tag, falling back to the display name.
    pub fn localized_name(&self, lang: &str) -> &'static str {
        self.localized
            .iter()
            .find(|(tag, _)| *tag == lang)
            .map(|(_, label)| *label)
            .unwrap_or(self.display_name)
    }
}

/// An output aspect ratio with its canonical pixel dimensions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AspectRatio {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Localization map; empty when no translation exists.
    pub localized: &'static [(&'static str, &'static str)],
    /// The `"W:H"` label used in prompts and API payloads.
    pub ratio_label: &'static str,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl AspectRatio {
    /// Label for the given language tag, falling back to the display name.
    pub fn localized_name(&self, lang: &str) -> &'static str {
        self.localized
            .iter()
            .find(|(tag, _)| *tag == lang)
            .map(|(_, label)| *label)
            .unwrap_or(self.display_name)
    }
}

/// Subscription tier required for a model.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Free,
    Pro,
}

/// Coarse latency/quality class of a model.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpeedClass {
    Fast,
    Quality,
}

/// A selectable image-generation model.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ImageModel {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub tier: ModelTier,
    /// The model id sent to the AI gateway.
    pub backend_model_id: &'static str,
    pub speed_class: SpeedClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTION: EditOption = EditOption {
        id: "test",
        display_name: "Test",
        localized: &[("ar", "اختبار")],
        prompt_fragment: "test fragment",
        category: EditCategory::Effects,
    };

    #[test]
    fn test_localized_name_lookup() {
        assert_eq!(OPTION.localized_name("ar"), "اختبار");
        assert_eq!(OPTION.localized_name("en"), "Test");
        assert_eq!(OPTION.localized_name("fr"), "Test");
    }

    #[test]
    fn test_category_order() {
        assert_eq!(EditCategory::all().first(), Some(&EditCategory::ArtStyle));
        assert_eq!(EditCategory::all().len(), 6);
    }
}
