//! Reference-image intake.
//!
//! Validates user-supplied images (media type, size ceiling) and produces
//! the transport-ready data-URL representation. Independent of the
//! composer; slots live in session state and are never persisted.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use imaginary_types::error::IntakeError;
use imaginary_types::models::{ElementSet, ReferenceImage};

/// Decoded-payload ceiling for a reference image.
pub const MAX_REFERENCE_BYTES: usize = 10 * 1024 * 1024;

/// Accept an already-encoded `data:` URL after validating it.
pub fn from_data_url(data_url: &str, elements: ElementSet) -> Result<ReferenceImage, IntakeError> {
    let rest = data_url.strip_prefix("data:").ok_or(IntakeError::NotADataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(IntakeError::NotADataUrl)?;

    let media_type = header.split(';').next().unwrap_or_default();
    if !media_type.starts_with("image/") {
        return Err(IntakeError::UnsupportedMediaType { media_type: media_type.to_string() });
    }
    if !header.contains("base64") {
        return Err(IntakeError::InvalidEncoding);
    }

    let decoded = BASE64.decode(payload).map_err(|_| IntakeError::InvalidEncoding)?;
    if decoded.len() > MAX_REFERENCE_BYTES {
        return Err(IntakeError::TooLarge {
            size_bytes: decoded.len(),
            limit_bytes: MAX_REFERENCE_BYTES,
        });
    }

    Ok(ReferenceImage { data_url: data_url.to_string(), elements })
}

/// Encode raw image bytes into a validated reference.
pub fn from_bytes(
    media_type: &str,
    bytes: &[u8],
    elements: ElementSet,
) -> Result<ReferenceImage, IntakeError> {
    if !media_type.starts_with("image/") {
        return Err(IntakeError::UnsupportedMediaType { media_type: media_type.to_string() });
    }
    if bytes.len() > MAX_REFERENCE_BYTES {
        return Err(IntakeError::TooLarge {
            size_bytes: bytes.len(),
            limit_bytes: MAX_REFERENCE_BYTES,
        });
    }

    let data_url = format!("data:{};base64,{}", media_type, BASE64.encode(bytes));
    Ok(ReferenceImage { data_url, elements })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use imaginary_types::models::ReferenceElement;

    #[test]
    fn test_accepts_small_image() {
        let image = from_bytes("image/png", &[0x89, 0x50, 0x4e, 0x47], ElementSet::new()).unwrap();
        assert!(image.data_url.starts_with("data:image/png;base64,"));

        let roundtrip = from_data_url(&image.data_url, ElementSet::new()).unwrap();
        assert_eq!(roundtrip.data_url, image.data_url);
    }

    #[test]
    fn test_rejects_non_image_media_type() {
        let err = from_bytes("text/plain", b"hello", ElementSet::new()).unwrap_err();
        assert_eq!(err, IntakeError::UnsupportedMediaType { media_type: "text/plain".to_string() });

        let err = from_data_url("data:text/plain;base64,aGVsbG8=", ElementSet::new()).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedMediaType { .. }));
    }

    #[test]
    fn test_rejects_oversized_payload() {
        let bytes = vec![0u8; MAX_REFERENCE_BYTES + 1];
        let err = from_bytes("image/jpeg", &bytes, ElementSet::new()).unwrap_err();
        assert!(matches!(err, IntakeError::TooLarge { .. }));
    }

    #[test]
    fn test_rejects_non_data_url() {
        let err = from_data_url("https://example.com/a.png", ElementSet::new()).unwrap_err();
        assert_eq!(err, IntakeError::NotADataUrl);
    }

    #[test]
    fn test_rejects_bad_base64() {
        let err = from_data_url("data:image/png;base64,!!!", ElementSet::new()).unwrap_err();
        assert_eq!(err, IntakeError::InvalidEncoding);
    }

    #[test]
    fn test_elements_are_carried() {
        let elements: ElementSet =
            [ReferenceElement::Face, ReferenceElement::Face].into_iter().collect();
        let image = from_bytes("image/png", &[0u8], elements).unwrap();
        assert_eq!(image.elements.len(), 1);
        assert!(image.has_element(ReferenceElement::Face));
    }
}
