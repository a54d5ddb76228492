//! Gateway proxy errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while proxying a request to the AI gateway or the
/// media CDN.
///
/// Every proxy handler translates upstream failures into one of these
/// categories; none of them is ever retried automatically.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GatewayError {
    /// A required request field is missing or empty
    #[error("{message}")]
    InvalidRequest { message: String },

    /// Rate limited by the upstream gateway (429)
    #[error("Rate limited by the AI gateway")]
    RateLimited,

    /// Usage quota exhausted on the upstream gateway (402)
    #[error("Usage quota exhausted on the AI gateway")]
    QuotaExceeded,

    /// Any other non-success upstream status
    #[error("AI gateway error: {status}")]
    Upstream { status: u16, message: String },

    /// Upstream answered 2xx but the expected payload field was missing
    #[error("{message}")]
    EmptyResponse { message: String },

    /// A required credential is absent from the environment
    #[error("{service} credentials are not configured")]
    MissingCredentials { service: String },

    /// Transport-level failure before an upstream status was received
    #[error("Network error: {message}")]
    Network { message: String },
}

impl GatewayError {
    /// Translate an upstream HTTP status into an error category.
    ///
    /// 429 and 402 keep their distinct categories so the client can tell a
    /// transient rate limit from an exhausted quota; everything else
    /// collapses into the generic upstream failure.
    pub fn from_upstream_status(status: u16, message: String) -> Self {
        match status {
            429 => Self::RateLimited,
            402 => Self::QuotaExceeded,
            _ => Self::Upstream { status, message },
        }
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::RateLimited => 429,
            Self::QuotaExceeded => 402,
            Self::Upstream { .. }
            | Self::EmptyResponse { .. }
            | Self::MissingCredentials { .. }
            | Self::Network { .. } => 500,
        }
    }

    /// The fixed message surfaced to API clients for this category.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest { message } | Self::EmptyResponse { message } => message.clone(),
            Self::RateLimited => "Rate limit exceeded. Please try again in a moment.".to_string(),
            Self::QuotaExceeded => {
                "Usage limit reached. Please add credits to continue.".to_string()
            }
            Self::Upstream { status, .. } => format!("AI gateway error: {}", status),
            Self::MissingCredentials { service } => {
                format!("{} credentials are not configured", service)
            }
            Self::Network { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_translation() {
        assert_eq!(
            GatewayError::from_upstream_status(429, String::new()),
            GatewayError::RateLimited
        );
        assert_eq!(
            GatewayError::from_upstream_status(402, String::new()),
            GatewayError::QuotaExceeded
        );
        assert_eq!(
            GatewayError::from_upstream_status(503, "down".to_string()),
            GatewayError::Upstream { status: 503, message: "down".to_string() }
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(GatewayError::RateLimited.http_status_code(), 429);
        assert_eq!(GatewayError::QuotaExceeded.http_status_code(), 402);
        assert_eq!(
            GatewayError::InvalidRequest { message: "Prompt is required".to_string() }
                .http_status_code(),
            400
        );
        assert_eq!(
            GatewayError::Upstream { status: 503, message: String::new() }.http_status_code(),
            500
        );
    }

    #[test]
    fn test_rate_limit_and_quota_messages_differ() {
        let rate = GatewayError::RateLimited.client_message();
        let quota = GatewayError::QuotaExceeded.client_message();
        assert_ne!(rate, quota);
        assert!(rate.contains("try again"));
        assert!(quota.contains("credits"));
    }
}
