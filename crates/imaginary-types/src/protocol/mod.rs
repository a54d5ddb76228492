//! AI-gateway protocol message types.

pub mod chat;

pub use chat::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole, ContentPart,
    ImageUrlPart, MessageContent, ResponseImage, ResponseMessage,
};
