//! The edit-option catalog: reusable prompt fragments by category.

use imaginary_types::models::{EditCategory, EditOption};

const fn opt(
    id: &'static str,
    display_name: &'static str,
    prompt_fragment: &'static str,
    category: EditCategory,
) -> EditOption {
    EditOption { id, display_name, localized: &[], prompt_fragment, category }
}

/// Every selectable edit option, in catalog (= composition) order.
pub const EDIT_OPTIONS: &[EditOption] = &[
    // Art Styles
    opt("cyberpunk", "Cyberpunk", "cyberpunk style, neon lights, futuristic city", EditCategory::ArtStyle),
    opt("anime", "Anime", "anime style, vibrant colors, detailed illustration, Studio Ghibli inspired", EditCategory::ArtStyle),
    opt("oil-painting", "Oil Painting", "oil painting style, textured brushstrokes, classical art, museum quality", EditCategory::ArtStyle),
    opt("watercolor", "Watercolor", "watercolor painting, soft colors, artistic, flowing pigments", EditCategory::ArtStyle),
    opt("3d-render", "3D Render", "3D render, octane render, highly detailed CGI, Blender", EditCategory::ArtStyle),
    opt("photorealistic", "Photorealistic", "photorealistic, ultra realistic, 8K photography, DSLR quality", EditCategory::ArtStyle),
    opt("fantasy", "Fantasy Art", "fantasy art style, magical, epic, detailed illustration", EditCategory::ArtStyle),
    opt("surrealism", "Surrealism", "surrealist art, dreamlike, Salvador Dali inspired, impossible geometry", EditCategory::ArtStyle),
    opt("pixel-art", "Pixel Art", "pixel art style, 16-bit, retro game aesthetic", EditCategory::ArtStyle),
    opt("comic-book", "Comic Book", "comic book style, bold lines, halftone dots, dynamic", EditCategory::ArtStyle),
    opt("steampunk", "Steampunk", "steampunk style, Victorian era, brass gears, mechanical", EditCategory::ArtStyle),
    opt("vaporwave", "Vaporwave", "vaporwave aesthetic, retro 80s, pink and blue, synthwave", EditCategory::ArtStyle),
    // Lighting
    opt("golden-hour", "Golden Hour", "golden hour lighting, warm sunlight, soft shadows, magic hour", EditCategory::Lighting),
    opt("dramatic", "Dramatic", "dramatic lighting, high contrast, chiaroscuro, Rembrandt lighting", EditCategory::Lighting),
    opt("neon-glow", "Neon Glow", "neon lighting, glowing effects, vibrant colors, light trails", EditCategory::Lighting),
    opt("studio", "Studio Light", "professional studio lighting, soft box, key light, fill light", EditCategory::Lighting),
    opt("moonlight", "Moonlight", "moonlit scene, soft blue light, nighttime, ethereal glow", EditCategory::Lighting),
    opt("volumetric", "Volumetric", "volumetric lighting, god rays, light beams, atmospheric", EditCategory::Lighting),
    opt("cinematic", "Cinematic", "cinematic lighting, movie scene, color graded, anamorphic", EditCategory::Lighting),
    opt("bioluminescent", "Bioluminescent", "bioluminescent lighting, glowing organisms, Avatar style", EditCategory::Lighting),
    // Effects
    opt("bokeh", "Bokeh", "bokeh effect, blurred background, shallow depth of field, f/1.4", EditCategory::Effects),
    opt("particles", "Particles", "particle effects, magical particles, sparkles, floating embers", EditCategory::Effects),
    opt("fog", "Atmospheric Fog", "atmospheric fog, misty, ethereal atmosphere, volumetric haze", EditCategory::Effects),
    opt("reflections", "Reflections", "reflective surfaces, mirror-like reflections, wet surfaces", EditCategory::Effects),
    opt("motion-blur", "Motion Blur", "motion blur, dynamic movement, speed lines, action shot", EditCategory::Effects),
    opt("rain", "Rain", "rain effects, wet surfaces, rain drops, stormy weather", EditCategory::Effects),
    opt("fire", "Fire & Flames", "fire effects, flames, burning embers, heat distortion", EditCategory::Effects),
    opt("snow", "Snow", "snow effects, falling snowflakes, frost, winter scene", EditCategory::Effects),
    opt("lens-flare", "Lens Flare", "lens flare, anamorphic flare, light streaks", EditCategory::Effects),
    opt("chromatic", "Chromatic", "chromatic aberration, RGB split, glitch effect", EditCategory::Effects),
    // Environment
    opt("underwater", "Underwater", "underwater scene, ocean depths, caustic light, bubbles", EditCategory::Environment),
    opt("space", "Space", "outer space, nebula, stars, cosmic, galactic", EditCategory::Environment),
    opt("forest", "Enchanted Forest", "enchanted forest, mystical woods, fairy tale setting", EditCategory::Environment),
    opt("urban", "Urban City", "urban cityscape, metropolitan, skyscrapers, city lights", EditCategory::Environment),
    opt("desert", "Desert", "desert landscape, sand dunes, arid, golden sands", EditCategory::Environment),
    opt("arctic", "Arctic", "arctic environment, ice, frozen landscape, aurora borealis", EditCategory::Environment),
    // Camera & Composition
    opt("macro", "Macro Shot", "macro photography, extreme close-up, fine details", EditCategory::Camera),
    opt("wide-angle", "Wide Angle", "wide angle lens, expansive view, 16mm lens", EditCategory::Camera),
    opt("portrait", "Portrait", "portrait photography, 85mm lens, shallow depth", EditCategory::Camera),
    opt("aerial", "Aerial View", "aerial view, birds eye view, drone shot", EditCategory::Camera),
    opt("symmetry", "Symmetry", "perfect symmetry, centered composition, balanced", EditCategory::Camera),
    opt("tilt-shift", "Tilt Shift", "tilt shift effect, miniature effect, selective focus", EditCategory::Camera),
    // Quality & Detail
    opt("8k", "8K Ultra HD", "8K resolution, ultra high definition, extremely detailed", EditCategory::Quality),
    opt("masterpiece", "Masterpiece", "masterpiece, best quality, award-winning, exceptional", EditCategory::Quality),
    opt("trending", "Trending Art", "trending on ArtStation, popular artwork, featured", EditCategory::Quality),
    opt("intricate", "Intricate Detail", "intricate details, fine textures, ornate, elaborate", EditCategory::Quality),
    opt("sharp", "Sharp Focus", "sharp focus, crisp details, high clarity, tack sharp", EditCategory::Quality),
    opt("hdr", "HDR", "HDR, high dynamic range, vivid colors, enhanced contrast", EditCategory::Quality),
];

/// Look up an edit option by its id.
pub fn edit_option_by_id(id: &str) -> Option<&'static EditOption> {
    EDIT_OPTIONS.iter().find(|o| o.id == id)
}

/// Filter the catalog down to the selected ids, preserving catalog order.
///
/// Selection insertion order is a display concern only; composition always
/// walks the catalog.
pub fn selected_in_catalog_order<S: AsRef<str>>(selected: &[S]) -> Vec<&'static EditOption> {
    EDIT_OPTIONS
        .iter()
        .filter(|o| selected.iter().any(|s| s.as_ref() == o.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in EDIT_OPTIONS.iter().enumerate() {
            for b in &EDIT_OPTIONS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate edit option id {}", a.id);
            }
        }
    }

    #[test]
    fn test_selection_order_is_catalog_order() {
        // Selected in reverse display order; composition order must not care.
        let selected = ["hdr".to_string(), "cyberpunk".to_string(), "fog".to_string()];
        let ordered = selected_in_catalog_order(&selected);
        let ids: Vec<&str> = ordered.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["cyberpunk", "fog", "hdr"]);
    }

    #[test]
    fn test_lookup() {
        assert!(edit_option_by_id("bokeh").is_some());
        assert!(edit_option_by_id("nonexistent").is_none());
    }
}
