//! The prompt composer.
//!
//! Folds free text, selected edit options, reference-image element
//! selections, and the aspect ratio into the final prompt string handed to
//! the generation backend. Pure and deterministic: no I/O, no randomness,
//! and no length guard (transport limits are the consumer's concern).
//!
//! Output is the blank-line paragraph form; the older comma-joined
//! single-line form is deprecated and intentionally not mixed in.

mod reference_text;
pub mod templates;

use imaginary_types::models::{AspectRatio, ReferenceElement, ReferenceImage};

use crate::catalog;

/// Framing sentence prepended when a face-preserving subject reference is
/// attached and the user text does not already reference it.
const IDENTITY_FRAMING: &str = "Show the same person from the uploaded subject image.";

/// Fallback user text when nothing was typed but a face-preserving subject
/// reference is attached.
const FALLBACK_SUBJECT: &str =
    "Create a new high-quality image of the same person from the uploaded subject image.";

/// Fallback user text when nothing was typed but some reference is attached.
const FALLBACK_GENERIC: &str =
    "Create a new high-quality image based on the uploaded reference image.";

/// Trailing quality-enhancer clause appended to every non-empty prompt.
const QUALITY_CLAUSE: &str =
    "Ultra high resolution, sharp focus, professional lighting, highly detailed, \
     professional quality.";

/// Everything the composer needs, gathered by the caller.
#[derive(Debug, Clone)]
pub struct PromptInput<'a> {
    pub base_prompt: &'a str,
    /// Selected edit-option ids; order here is irrelevant, composition
    /// always walks the catalog.
    pub selected_edit_ids: &'a [String],
    pub subject: Option<&'a ReferenceImage>,
    pub style: Option<&'a ReferenceImage>,
    pub aspect_ratio: &'a AspectRatio,
}

fn contains_identity_phrase(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("same person") || lower.contains("uploaded image")
}

fn user_text(input: &PromptInput<'_>) -> String {
    let mut text = input.base_prompt.trim().to_string();

    let fragments: Vec<&str> = catalog::selected_in_catalog_order(input.selected_edit_ids)
        .iter()
        .map(|o| o.prompt_fragment)
        .collect();
    if !fragments.is_empty() {
        let joined = fragments.join(", ");
        text = if text.is_empty() { joined } else { format!("{}, {}", text, joined) };
    }

    let subject_face = input
        .subject
        .map(|s| s.has_element(ReferenceElement::Face))
        .unwrap_or(false);

    if !text.is_empty() {
        if subject_face && !contains_identity_phrase(&text) {
            text = format!("{} {}", IDENTITY_FRAMING, text);
        }
        return text;
    }

    if input.subject.is_some() || input.style.is_some() {
        let fallback = if subject_face { FALLBACK_SUBJECT } else { FALLBACK_GENERIC };
        return fallback.to_string();
    }

    String::new()
}

/// Compose the final prompt.
///
/// Returns the empty string when there is nothing to say (no text, no
/// edits, no references); refusing to submit an empty prompt is the
/// caller's responsibility.
pub fn compose(input: &PromptInput<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(subject) = input.subject {
        let paragraph = reference_text::subject_paragraph(&subject.elements);
        if !paragraph.is_empty() {
            parts.push(paragraph);
        }
    }

    if let Some(style) = input.style {
        let paragraph = reference_text::style_paragraph(&style.elements);
        if !paragraph.is_empty() {
            parts.push(paragraph);
        }
    }

    let text = user_text(input);
    if parts.is_empty() && text.is_empty() {
        return String::new();
    }
    if !text.is_empty() {
        parts.push(text);
    }

    parts.push(catalog::format_clause(input.aspect_ratio.ratio_label));
    parts.push(QUALITY_CLAUSE.to_string());

    parts.join("\n\n")
}
