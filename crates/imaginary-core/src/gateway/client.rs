//! The gateway HTTP client: generate, improve, describe.

use imaginary_types::error::GatewayError;
use imaginary_types::protocol::chat::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentPart, ImageUrlPart,
};
use std::time::Duration;
use tracing::{error, info};

use super::influence::reference_framing;
use crate::catalog;

const REQUEST_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fixed wrapper around the user's description in generation requests.
const GENERATION_WRAPPER_PREFIX: &str =
    "Generate a stunning, high-quality image based on this description: ";
const GENERATION_WRAPPER_SUFFIX: &str = ". Make it visually impressive and artistic.";

const IMPROVE_SYSTEM_PROMPT: &str = "You are an expert AI image prompt engineer. Your task is to take a user's simple prompt and enhance it to create stunning, professional-quality AI-generated images.

Add these elements to improve the prompt:
- Specific art styles (photorealistic, digital art, oil painting, etc.)
- Lighting details (golden hour, dramatic lighting, cinematic)
- Camera angles and perspectives
- Quality enhancers (8K, ultra HD, highly detailed)
- Mood and atmosphere
- Color palette suggestions
- Composition elements

Keep the core idea but make it much more detailed and artistic. Return ONLY the improved prompt, nothing else.";

const ENHANCE_SYSTEM_PROMPT: &str = "You are an expert AI image prompt engineer. Your task is to enhance an existing image by suggesting improvements to its prompt.

Based on the original prompt, suggest enhancements for:
- Better composition
- Enhanced lighting
- More vivid colors
- Higher detail
- Artistic improvements
- Better quality descriptors

Return ONLY the improved prompt that would create an enhanced version of the image, nothing else.";

const DESCRIBE_SYSTEM_PROMPT: &str = "You are an expert image analyst. Your task is to describe an image in detail so it can be used as a prompt to generate similar images.

Describe:
1. **Subject**: What is the main subject? (person, animal, object, scene)
2. **Appearance**: Physical details, clothing, colors, features
3. **Setting/Environment**: Where is this? Background details
4. **Pose/Action**: What is happening? Body position, expression
5. **Style**: Art style, lighting, mood, atmosphere
6. **Composition**: Camera angle, framing

Write a detailed but concise description (3-5 sentences) that captures everything needed to recreate this image.
Return ONLY the description prompt, nothing else.";

/// Which of the two fixed improvement instructions to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImproveMode {
    Improve,
    Enhance,
}

impl ImproveMode {
    /// The wire value of the request's `type` field; anything other than
    /// `"improve"` selects the enhance instruction.
    pub fn from_request_type(value: Option<&str>) -> Self {
        match value {
            Some("improve") => Self::Improve,
            _ => Self::Enhance,
        }
    }

    fn system_prompt(self) -> &'static str {
        match self {
            Self::Improve => IMPROVE_SYSTEM_PROMPT,
            Self::Enhance => ENHANCE_SYSTEM_PROMPT,
        }
    }
}

/// Options for one generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub prompt: String,
    /// Backend model id; unknown values are coerced to the default.
    pub model: Option<String>,
    /// Subject reference as a data URL.
    pub reference_image: Option<String>,
    /// Style reference as a data URL.
    pub style_image: Option<String>,
    pub subject_influence: Option<f64>,
    pub style_influence: Option<f64>,
}

/// A successful generation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    /// The backend model that actually served the request.
    pub model: String,
}

/// Client for the AI gateway's chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GatewayClient {
    /// Build a client with the standard timeouts.
    ///
    /// The API key may be absent; calls then fail with a credentials error
    /// at request time rather than preventing startup.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .tcp_nodelay(true)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { http, base_url: base_url.into().trim_end_matches('/').to_string(), api_key }
    }

    fn api_key(&self) -> Result<&str, GatewayError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GatewayError::MissingCredentials { service: "AI gateway".to_string() })
    }

    async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GatewayError> {
        let key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(key)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network { message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("AI gateway error: {} {}", status, body);
            return Err(GatewayError::from_upstream_status(status.as_u16(), body));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| GatewayError::Network { message: e.to_string() })
    }

    /// Generate one image for a composed prompt.
    pub async fn generate_image(
        &self,
        options: GenerateOptions,
    ) -> Result<GeneratedImage, GatewayError> {
        let model = catalog::resolve_backend_model(options.model.as_deref());

        let enhanced = reference_framing(
            &options.prompt,
            options.subject_influence,
            options.reference_image.is_some(),
            options.style_influence,
            options.style_image.is_some(),
        );
        let text =
            format!("{}{}{}", GENERATION_WRAPPER_PREFIX, enhanced, GENERATION_WRAPPER_SUFFIX);

        let mut parts = vec![ContentPart::Text { text }];
        if let Some(url) = options.reference_image {
            parts.push(ContentPart::ImageUrl { image_url: ImageUrlPart { url } });
        }
        if let Some(url) = options.style_image {
            parts.push(ContentPart::ImageUrl { image_url: ImageUrlPart { url } });
        }

        info!(
            "Generating image with model {} ({} message part{})",
            model,
            parts.len(),
            if parts.len() == 1 { "" } else { "s" }
        );

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user_parts(parts)],
            modalities: Some(vec!["image".to_string(), "text".to_string()]),
        };

        let response = self.chat(&request).await?;
        let url = response.first_image_url().ok_or_else(|| GatewayError::EmptyResponse {
            message: "No image was generated".to_string(),
        })?;

        Ok(GeneratedImage { url: url.to_string(), model: model.to_string() })
    }

    /// Rewrite a prompt with one of the fixed improvement instructions.
    pub async fn improve_prompt(
        &self,
        prompt: &str,
        mode: ImproveMode,
    ) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: catalog::TEXT_BACKEND_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(mode.system_prompt()),
                ChatMessage::user(format!(
                    "Original prompt: \"{}\"\n\nPlease improve this prompt for AI image generation.",
                    prompt
                )),
            ],
            modalities: None,
        };

        let response = self.chat(&request).await?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| GatewayError::EmptyResponse {
                message: "Failed to improve prompt".to_string(),
            })
    }

    /// Describe an image so the description can seed similar generations.
    pub async fn describe_image(&self, image_url: &str) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: catalog::TEXT_BACKEND_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(DESCRIBE_SYSTEM_PROMPT),
                ChatMessage::user_parts(vec![
                    ContentPart::Text {
                        text: "Describe this image in detail. Include the subject, appearance, \
                               setting, actions, style, and composition."
                            .to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrlPart { url: image_url.to_string() },
                    },
                ]),
            ],
            modalities: None,
        };

        let response = self.chat(&request).await?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| GatewayError::EmptyResponse {
                message: "Failed to extract description from image".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_mode_from_request_type() {
        assert_eq!(ImproveMode::from_request_type(Some("improve")), ImproveMode::Improve);
        assert_eq!(ImproveMode::from_request_type(Some("enhance")), ImproveMode::Enhance);
        assert_eq!(ImproveMode::from_request_type(Some("anything")), ImproveMode::Enhance);
        assert_eq!(ImproveMode::from_request_type(None), ImproveMode::Enhance);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        let client = GatewayClient::new("http://127.0.0.1:9", None);
        let err = client
            .generate_image(GenerateOptions { prompt: "a dragon".to_string(), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredentials { .. }));
    }
}
