//! Signed CDN upload client.
//!
//! The media CDN authenticates uploads with a SHA-1 signature over the
//! sorted request parameters plus the API secret. One multipart request
//! per upload; no retries.

use chrono::Utc;
use imaginary_types::error::GatewayError;
use serde::Deserialize;
use sha1::{Digest, Sha1};
use std::time::Duration;
use tracing::{error, info};

/// Default folder for uploaded assets.
pub const DEFAULT_FOLDER: &str = "promptcraft";

const UPLOAD_TIMEOUT_SECS: u64 = 120;

/// The parameter string that gets signed.
pub fn signature_payload(folder: &str, timestamp: i64) -> String {
    format!("folder={}&timestamp={}", folder, timestamp)
}

/// Hex-encoded SHA-1 signature over the parameter string and secret.
pub fn sign(folder: &str, timestamp: i64, api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(signature_payload(folder, timestamp).as_bytes());
    hasher.update(api_secret.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// A successfully uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub url: String,
    pub public_id: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize)]
struct CdnUploadResponse {
    secure_url: String,
    public_id: String,
    width: u32,
    height: u32,
}

/// Client for the CDN's signed image-upload endpoint.
#[derive(Debug, Clone)]
pub struct CdnUploader {
    http: reqwest::Client,
    upload_base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CdnUploader {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self::with_base_url("https://api.cloudinary.com/v1_1", cloud_name, api_key, api_secret)
    }

    /// Point the uploader at a different endpoint (tests).
    pub fn with_base_url(
        upload_base_url: impl Into<String>,
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            upload_base_url: upload_base_url.into().trim_end_matches('/').to_string(),
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Upload one image (data URL or base64 payload) into the folder.
    pub async fn upload(&self, image: &str, folder: &str) -> Result<UploadedAsset, GatewayError> {
        let timestamp = Utc::now().timestamp();
        let signature = sign(folder, timestamp, &self.api_secret);

        let form = reqwest::multipart::Form::new()
            .text("file", image.to_string())
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            .text("folder", folder.to_string());

        let url = format!("{}/{}/image/upload", self.upload_base_url, self.cloud_name);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::Network { message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("CDN upload error: {} {}", status, body);
            return Err(GatewayError::from_upstream_status(status.as_u16(), body));
        }

        let parsed: CdnUploadResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Network { message: e.to_string() })?;

        info!("Image uploaded: {}", parsed.secure_url);

        Ok(UploadedAsset {
            url: parsed.secure_url,
            public_id: parsed.public_id,
            width: parsed.width,
            height: parsed.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_payload_shape() {
        assert_eq!(
            signature_payload("promptcraft", 1_700_000_000),
            "folder=promptcraft&timestamp=1700000000"
        );
    }

    #[test]
    fn test_signature_is_deterministic_hex() {
        let a = sign("promptcraft", 1_700_000_000, "secret");
        let b = sign("promptcraft", 1_700_000_000, "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_depends_on_every_input() {
        let base = sign("promptcraft", 1_700_000_000, "secret");
        assert_ne!(base, sign("other", 1_700_000_000, "secret"));
        assert_ne!(base, sign("promptcraft", 1_700_000_001, "secret"));
        assert_ne!(base, sign("promptcraft", 1_700_000_000, "other"));
    }
}
