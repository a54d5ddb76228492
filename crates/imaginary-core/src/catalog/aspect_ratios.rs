//! The aspect-ratio catalog and the prompt format-clause table.

use imaginary_types::models::AspectRatio;

/// Every selectable aspect ratio. The first entry is the default.
pub const ASPECT_RATIOS: &[AspectRatio] = &[
    AspectRatio {
        id: "1:1",
        display_name: "Square",
        localized: &[("ar", "مربع")],
        ratio_label: "1:1",
        pixel_width: 1024,
        pixel_height: 1024,
    },
    AspectRatio {
        id: "16:9",
        display_name: "Landscape",
        localized: &[("ar", "أفقي")],
        ratio_label: "16:9",
        pixel_width: 1920,
        pixel_height: 1080,
    },
    AspectRatio {
        id: "9:16",
        display_name: "Portrait",
        localized: &[("ar", "عمودي")],
        ratio_label: "9:16",
        pixel_width: 1080,
        pixel_height: 1920,
    },
    AspectRatio {
        id: "4:3",
        display_name: "Classic",
        localized: &[("ar", "كلاسيكي")],
        ratio_label: "4:3",
        pixel_width: 1024,
        pixel_height: 768,
    },
    AspectRatio {
        id: "3:4",
        display_name: "Portrait 3:4",
        localized: &[("ar", "عمودي 3:4")],
        ratio_label: "3:4",
        pixel_width: 768,
        pixel_height: 1024,
    },
    AspectRatio {
        id: "21:9",
        display_name: "Cinematic",
        localized: &[("ar", "سينمائي")],
        ratio_label: "21:9",
        pixel_width: 1920,
        pixel_height: 820,
    },
    AspectRatio {
        id: "3:2",
        display_name: "Photo",
        localized: &[("ar", "صورة")],
        ratio_label: "3:2",
        pixel_width: 1536,
        pixel_height: 1024,
    },
    AspectRatio {
        id: "2:3",
        display_name: "Portrait 2:3",
        localized: &[("ar", "عمودي 2:3")],
        ratio_label: "2:3",
        pixel_width: 1024,
        pixel_height: 1536,
    },
];

/// Look up a ratio by id.
pub fn aspect_ratio_by_id(id: &str) -> Option<&'static AspectRatio> {
    ASPECT_RATIOS.iter().find(|r| r.id == id)
}

/// The default ratio (first catalog entry).
pub fn default_aspect_ratio() -> &'static AspectRatio {
    &ASPECT_RATIOS[0]
}

/// Human-readable format clause for a ratio label.
///
/// Unrecognized labels fall back to a plain `"{ratio} aspect ratio"`.
pub fn format_clause(ratio_label: &str) -> String {
    match ratio_label {
        "1:1" => "Square format (1:1 aspect ratio)".to_string(),
        "16:9" => "Widescreen cinematic format (16:9 aspect ratio)".to_string(),
        "9:16" => "Vertical portrait format (9:16 aspect ratio)".to_string(),
        "4:3" => "Classic landscape format (4:3 aspect ratio)".to_string(),
        "3:4" => "Classic portrait format (3:4 aspect ratio)".to_string(),
        "21:9" => "Ultra-wide cinematic format (21:9 aspect ratio)".to_string(),
        "3:2" => "Photographic landscape format (3:2 aspect ratio)".to_string(),
        "2:3" => "Photographic portrait format (2:3 aspect ratio)".to_string(),
        other => format!("{} aspect ratio", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_square() {
        assert_eq!(default_aspect_ratio().id, "1:1");
    }

    #[test]
    fn test_every_catalog_ratio_has_a_fixed_clause() {
        for ratio in ASPECT_RATIOS {
            let clause = format_clause(ratio.ratio_label);
            assert!(clause.contains(ratio.ratio_label));
            assert!(clause.contains("format ("), "no fixed clause for {}", ratio.id);
        }
    }

    #[test]
    fn test_widescreen_clause() {
        assert_eq!(format_clause("16:9"), "Widescreen cinematic format (16:9 aspect ratio)");
    }

    #[test]
    fn test_unrecognized_ratio_falls_back() {
        assert_eq!(format_clause("5:4"), "5:4 aspect ratio");
    }
}
