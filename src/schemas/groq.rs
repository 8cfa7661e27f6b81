//! Groq API schema definitions
//!
//! Only the outbound request shape is modelled. Upstream responses are
//! relayed to the caller as opaque JSON and never deserialized.

use serde::{Deserialize, Serialize};

/// Chat completion request sent to `POST /chat/completions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model ID (e.g., "llama-3.3-70b-versatile")
    pub model: String,

    /// Messages in the conversation
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Build a single-turn request carrying one user message
    pub fn single_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// A chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Message author role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}
