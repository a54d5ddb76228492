//! AI-gateway client.
//!
//! One outbound request per operation; failures are translated into
//! [`GatewayError`] categories and never retried.

mod client;
mod influence;

pub use client::{GatewayClient, GenerateOptions, GeneratedImage, ImproveMode};
pub use influence::{influence_level, reference_framing};

/// Default gateway endpoint.
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
