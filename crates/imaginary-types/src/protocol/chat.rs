//! Chat-completions API types for the AI gateway.
//!
//! The gateway speaks the OpenAI-compatible chat dialect with one
//! extension: responses may carry generated images alongside (or instead
//! of) text when the request asks for the `image` modality.

use serde::{Deserialize, Serialize};

/// Message role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// Reference to an image by URL (remote or data URL).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUrlPart {
    pub url: String,
}

/// One part of a multimodal message body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrlPart },
}

/// Message content: either a bare string or a list of multimodal parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: MessageContent::Text(text.into()) }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: MessageContent::Text(text.into()) }
    }

    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self { role: ChatRole::User, content: MessageContent::Parts(parts) }
    }
}

/// A chat-completion request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Requested output modalities; omitted for text-only calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<String>>,
}

/// A generated image attached to a response message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseImage {
    pub image_url: ImageUrlPart,
}

/// The assistant message of one choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Vec<ResponseImage>,
}

/// One completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatChoice {
    pub message: ResponseMessage,
}

/// A chat-completion response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Text content of the first choice, trimmed, if non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// URL of the first generated image of the first choice.
    pub fn first_image_url(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.images.first())
            .map(|i| i.image_url.url.as_str())
    }
}
