//! Fixed instruction sentences for reference-image element selections.

use imaginary_types::models::{ElementSet, ReferenceElement};

/// Emission order for subject-reference sentences.
const SUBJECT_ORDER: &[ReferenceElement] = &[
    ReferenceElement::Face,
    ReferenceElement::Body,
    ReferenceElement::Scene,
    ReferenceElement::Background,
];

/// Emission order for style-reference sentences.
const STYLE_ORDER: &[ReferenceElement] = &[
    ReferenceElement::Style,
    ReferenceElement::Background,
    ReferenceElement::Scene,
    ReferenceElement::Face,
    ReferenceElement::Body,
];

fn subject_sentence(element: ReferenceElement) -> Option<&'static str> {
    match element {
        ReferenceElement::Face => Some(
            "Preserve the exact identity of the person in the uploaded subject image: \
             do not alter their facial features, skin tone, hairstyle, age, or expression.",
        ),
        ReferenceElement::Body => Some(
            "Keep the subject's body shape, proportions, and posture exactly as they \
             appear in the uploaded subject image.",
        ),
        ReferenceElement::Scene => Some(
            "Recreate the overall scene from the uploaded subject image, keeping its \
             arrangement and key objects intact.",
        ),
        ReferenceElement::Background => Some(
            "Keep the background from the uploaded subject image, preserving its \
             setting and sense of depth.",
        ),
        ReferenceElement::Style => None,
    }
}

fn style_sentence(element: ReferenceElement) -> Option<&'static str> {
    match element {
        ReferenceElement::Style => Some(
            "Apply the artistic style of the uploaded style image: match its color \
             palette, brushwork, and rendering technique.",
        ),
        ReferenceElement::Background => Some(
            "Compose the background in the same manner as the uploaded style image, \
             without copying its subject.",
        ),
        ReferenceElement::Scene => {
            Some("Let the scene's mood and atmosphere follow the uploaded style image.")
        }
        ReferenceElement::Face => Some(
            "Render faces with the same stylistic treatment as the uploaded style \
             image, without transferring anyone's identity.",
        ),
        ReferenceElement::Body => {
            Some("Stylize figures and bodies the way the uploaded style image does.")
        }
    }
}

fn join_sentences(
    order: &[ReferenceElement],
    elements: &ElementSet,
    sentence: fn(ReferenceElement) -> Option<&'static str>,
) -> String {
    order
        .iter()
        .filter(|e| elements.contains(e))
        .filter_map(|e| sentence(*e))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Identity-preservation paragraph for a subject reference.
pub fn subject_paragraph(elements: &ElementSet) -> String {
    join_sentences(SUBJECT_ORDER, elements, subject_sentence)
}

/// Stylistic-transfer paragraph for a style reference.
pub fn style_paragraph(elements: &ElementSet) -> String {
    join_sentences(STYLE_ORDER, elements, style_sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elements: &[ReferenceElement]) -> ElementSet {
        elements.iter().copied().collect()
    }

    #[test]
    fn test_subject_order_is_fixed() {
        // BTreeSet iteration order differs from emission order on purpose.
        let elements = set(&[ReferenceElement::Background, ReferenceElement::Face]);
        let paragraph = subject_paragraph(&elements);
        let face_pos = paragraph.find("facial features").expect("face sentence missing");
        let bg_pos = paragraph.find("background").expect("background sentence missing");
        assert!(face_pos < bg_pos);
    }

    #[test]
    fn test_style_leads_with_style_sentence() {
        let elements = set(&[ReferenceElement::Body, ReferenceElement::Style]);
        let paragraph = style_paragraph(&elements);
        assert!(paragraph.starts_with("Apply the artistic style"));
    }

    #[test]
    fn test_empty_set_yields_empty_paragraph() {
        assert_eq!(subject_paragraph(&ElementSet::new()), "");
        assert_eq!(style_paragraph(&ElementSet::new()), "");
    }

    #[test]
    fn test_style_element_ignored_on_subject_reference() {
        let elements = set(&[ReferenceElement::Style]);
        assert_eq!(subject_paragraph(&elements), "");
    }
}
