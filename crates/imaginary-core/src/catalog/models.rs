//! The AI-model catalog and backend-model resolution.

use imaginary_types::models::{ImageModel, ModelTier, SpeedClass};

/// Every selectable image model. The first entry is the default.
pub const IMAGE_MODELS: &[ImageModel] = &[
    ImageModel {
        id: "nano-banana",
        display_name: "Nano Banana",
        description: "Fast & free - Great for quick iterations",
        tier: ModelTier::Free,
        backend_model_id: "google/gemini-2.5-flash-image-preview",
        speed_class: SpeedClass::Fast,
    },
    ImageModel {
        id: "gemini-pro-image",
        display_name: "Gemini Pro Image",
        description: "Higher quality - Best for final renders",
        tier: ModelTier::Pro,
        backend_model_id: "google/gemini-3-pro-image-preview",
        speed_class: SpeedClass::Quality,
    },
];

/// Backend model used by the text-only proxies (improve, describe).
pub const TEXT_BACKEND_MODEL: &str = "google/gemini-2.5-flash";

/// Look up a model by catalog id.
pub fn model_by_id(id: &str) -> Option<&'static ImageModel> {
    IMAGE_MODELS.iter().find(|m| m.id == id)
}

/// The default model (first catalog entry).
pub fn default_model() -> &'static ImageModel {
    &IMAGE_MODELS[0]
}

/// Coerce a requested backend model id to a supported one.
///
/// Unknown or missing ids silently map to the default backend model rather
/// than being rejected.
pub fn resolve_backend_model(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|id| IMAGE_MODELS.iter().find(|m| m.backend_model_id == id))
        .unwrap_or_else(default_model)
        .backend_model_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_passes_through() {
        assert_eq!(
            resolve_backend_model(Some("google/gemini-3-pro-image-preview")),
            "google/gemini-3-pro-image-preview"
        );
    }

    #[test]
    fn test_unknown_model_coerced_to_default() {
        assert_eq!(
            resolve_backend_model(Some("not-a-real-model")),
            "google/gemini-2.5-flash-image-preview"
        );
        assert_eq!(resolve_backend_model(None), "google/gemini-2.5-flash-image-preview");
    }

    #[test]
    fn test_default_is_free_tier() {
        assert_eq!(default_model().tier, ModelTier::Free);
        assert_eq!(default_model().speed_class, SpeedClass::Fast);
    }
}
