//! Groq service for upstream API interactions
//!
//! Every relay request maps to exactly one call here. Responses are checked
//! for a success status and well-formed JSON, then handed back untouched.

use crate::config::{ApiKey, GroqConfig};
use crate::schemas::groq::ChatCompletionRequest;
use reqwest::{Client, StatusCode};
use serde_json::value::RawValue;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when calling the Groq API
#[derive(Error, Debug)]
pub enum GroqError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from upstream.
    ///
    /// Status and body are kept for server-side logging only; callers of the
    /// relay see a generic internal error.
    #[error("Groq API error: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

// ============================================================================
// Groq Client
// ============================================================================

/// HTTP client for the Groq OpenAI-compatible API
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
}

impl GroqClient {
    /// Create a new client from upstream configuration
    pub fn new(config: &GroqConfig) -> Result<Self, GroqError> {
        let mut builder = Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder.build()?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_seconds = config.timeout_seconds,
            "Initialized Groq client"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a chat completion (non-streaming)
    pub async fn chat_completion(
        &self,
        api_key: &ApiKey,
        request: &ChatCompletionRequest,
    ) -> Result<Box<RawValue>, GroqError> {
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %request.model, url = %url, "Calling Groq chat completions API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// List models available to the configured key
    pub async fn list_models(&self, api_key: &ApiKey) -> Result<Box<RawValue>, GroqError> {
        let url = format!("{}/models", self.base_url);

        tracing::debug!(url = %url, "Calling Groq models API");

        let response = self
            .client
            .get(&url)
            .bearer_auth(api_key.expose())
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Box<RawValue>, GroqError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GroqError::Status { status, body });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = GroqConfig {
            base_url: "http://localhost:9000/openai/v1/".to_string(),
            ..GroqConfig::default()
        };

        let client = GroqClient::new(&config).expect("Should create client");
        assert_eq!(client.base_url(), "http://localhost:9000/openai/v1");
    }

    #[test]
    fn test_zero_timeout_builds_client() {
        let config = GroqConfig {
            timeout_seconds: 0,
            ..GroqConfig::default()
        };

        assert!(GroqClient::new(&config).is_ok());
    }

    #[test]
    fn test_status_error_display_keeps_detail() {
        let err = GroqError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "{\"error\":\"slow down\"}".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("slow down"));
    }
}
