//! Reference-influence framing for generation prompts.

/// Map a 0–1 influence value to its coarse instruction bucket.
pub fn influence_level(value: f64) -> &'static str {
    if value > 0.7 {
        "very closely"
    } else if value > 0.4 {
        "moderately"
    } else {
        "loosely"
    }
}

/// Wrap the prompt with follow-strength instructions for whichever
/// references are present.
///
/// An influence of zero disables the corresponding framing, matching the
/// behavior of an absent value.
pub fn reference_framing(
    prompt: &str,
    subject_influence: Option<f64>,
    has_subject: bool,
    style_influence: Option<f64>,
    has_style: bool,
) -> String {
    let mut enhanced = prompt.to_string();

    if has_subject {
        if let Some(value) = subject_influence.filter(|v| *v > 0.0) {
            enhanced = format!(
                "Using the provided reference image as a subject guide (follow it {}), generate: {}",
                influence_level(value),
                enhanced
            );
        }
    }

    if has_style {
        if let Some(value) = style_influence.filter(|v| *v > 0.0) {
            enhanced = format!(
                "{}. Match the artistic style of the style reference image {}.",
                enhanced,
                influence_level(value)
            );
        }
    }

    enhanced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(influence_level(0.71), "very closely");
        assert_eq!(influence_level(0.7), "moderately");
        assert_eq!(influence_level(0.41), "moderately");
        assert_eq!(influence_level(0.4), "loosely");
        assert_eq!(influence_level(0.1), "loosely");
    }

    #[test]
    fn test_subject_framing_wraps_prompt() {
        let framed = reference_framing("a dragon", Some(0.9), true, None, false);
        assert_eq!(
            framed,
            "Using the provided reference image as a subject guide (follow it very closely), \
             generate: a dragon"
        );
    }

    #[test]
    fn test_style_framing_appends() {
        let framed = reference_framing("a dragon", None, false, Some(0.5), true);
        assert!(framed.starts_with("a dragon."));
        assert!(framed.ends_with("style reference image moderately."));
    }

    #[test]
    fn test_zero_influence_is_ignored() {
        assert_eq!(reference_framing("a dragon", Some(0.0), true, Some(0.0), true), "a dragon");
    }

    #[test]
    fn test_influence_without_reference_is_ignored() {
        assert_eq!(reference_framing("a dragon", Some(0.9), false, None, false), "a dragon");
    }
}
