//! Creative prompt templates: seed prompts assembled from fixed word tables.
//!
//! The rng is injected so callers control determinism.

use rand::Rng;

const STYLES: &[&str] = &[
    "cyberpunk",
    "steampunk",
    "art nouveau",
    "surrealist",
    "impressionist",
    "photorealistic",
    "anime",
    "watercolor",
    "oil painting",
    "digital art",
    "3D render",
    "concept art",
    "fantasy illustration",
    "minimalist",
    "baroque",
    "vaporwave",
    "synthwave",
    "gothic",
    "art deco",
    "pop art",
];

const SUBJECTS: &[&str] = &[
    "a majestic dragon",
    "an ancient temple",
    "a futuristic cityscape",
    "a mystical forest",
    "a cosmic nebula",
    "a samurai warrior",
    "a steampunk airship",
    "an enchanted castle",
    "a cybernetic creature",
    "a floating island",
    "a phoenix rising",
    "an underwater kingdom",
    "a time traveler",
    "a magical library",
    "a robot gardener",
    "a crystal cave",
    "a wise wizard",
    "a space station",
    "a haunted mansion",
    "a neon-lit alley",
];

const SETTINGS: &[&str] = &[
    "at golden hour",
    "under a starry sky",
    "in a post-apocalyptic world",
    "during a thunderstorm",
    "in an alien landscape",
    "at the edge of the universe",
    "in a parallel dimension",
    "during cherry blossom season",
    "in eternal twilight",
    "at the bottom of the ocean",
    "on a distant planet",
    "in a dream sequence",
    "during an eclipse",
    "in a frozen wasteland",
    "at the gates of heaven",
];

const MOODS: &[&str] = &[
    "ethereal and mystical",
    "dark and ominous",
    "vibrant and energetic",
    "serene and peaceful",
    "chaotic and dynamic",
    "melancholic and nostalgic",
    "whimsical and playful",
    "epic and grandiose",
    "intimate and personal",
    "mysterious and enigmatic",
];

const DETAILS: &[&str] = &[
    "with intricate details",
    "with volumetric lighting",
    "with dramatic shadows",
    "with bioluminescent elements",
    "with holographic effects",
    "with particle effects",
    "with reflective surfaces",
    "with atmospheric fog",
    "with dynamic composition",
    "with cinematic framing",
];

const QUALITY_ENHANCERS: &[&str] = &[
    "8K resolution",
    "highly detailed",
    "masterpiece quality",
    "award-winning",
    "trending on ArtStation",
    "unreal engine 5",
    "octane render",
    "ray tracing",
    "hyperrealistic",
    "studio lighting",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table[rng.gen_range(0..table.len())]
}

/// A creative seed prompt in one of three complexity bands.
pub fn creative_prompt<R: Rng + ?Sized>(rng: &mut R) -> String {
    let style = pick(rng, STYLES);
    let subject = pick(rng, SUBJECTS);
    let setting = pick(rng, SETTINGS);
    let mood = pick(rng, MOODS);
    let detail = pick(rng, DETAILS);
    let quality = pick(rng, QUALITY_ENHANCERS);

    let complexity: f64 = rng.gen();
    if complexity < 0.3 {
        format!("{} in {} style, {}", subject, style, quality)
    } else if complexity < 0.7 {
        format!("{} {}, {} style, {}, {}", subject, setting, style, mood, quality)
    } else {
        format!(
            "{} {}, {} style, {} atmosphere, {}, {}",
            subject, setting, style, mood, detail, quality
        )
    }
}

/// A minimal subject + style seed prompt.
pub fn simple_prompt<R: Rng + ?Sized>(rng: &mut R) -> String {
    let style = pick(rng, STYLES);
    let subject = pick(rng, SUBJECTS);
    format!("{}, {} style", subject, style)
}
