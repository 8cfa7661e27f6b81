//! Chat relay endpoint
//!
//! This module implements `GET /api/chat`, which turns a prompt in the query
//! string into a single-message chat completion upstream.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::value::RawValue;

use crate::error::RelayError;
use crate::schemas::groq::ChatCompletionRequest;
use crate::server::state::AppState;

/// Query parameters accepted by `GET /api/chat`
#[derive(Debug, Default, PartialEq)]
pub struct ChatQuery {
    pub prompt: Option<String>,
    pub model: Option<String>,
}

impl ChatQuery {
    /// Build from raw query pairs
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "prompt" => &mut query.prompt,
                "model" => &mut query.model,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        query
    }
}

/// Relay a prompt to the upstream chat completions API
///
/// The upstream body is returned verbatim on success.
///
/// GET /api/chat?prompt=...&model=...
pub async fn chat(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Box<RawValue>>, RelayError> {
    let query = ChatQuery::from_pairs(pairs);

    let prompt = query
        .prompt
        .filter(|prompt| !prompt.is_empty())
        .ok_or(RelayError::MissingPrompt)?;

    let model = query
        .model
        .filter(|model| !model.is_empty())
        .unwrap_or_else(|| state.settings.groq.default_model.clone());

    let api_key = state.api_key()?;

    tracing::debug!(model = %model, prompt_len = prompt.len(), "Relaying chat request");

    let request = ChatCompletionRequest::single_prompt(model, prompt);
    let body = state.groq.chat_completion(api_key, &request).await?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_repeated_key_wins() {
        let query = ChatQuery::from_pairs(pairs(&[
            ("prompt", "first"),
            ("model", "llama-3.1-8b-instant"),
            ("prompt", "second"),
            ("model", "other"),
        ]));

        assert_eq!(query.prompt.as_deref(), Some("first"));
        assert_eq!(query.model.as_deref(), Some("llama-3.1-8b-instant"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let query = ChatQuery::from_pairs(pairs(&[("temperature", "2"), ("stream", "true")]));
        assert_eq!(query, ChatQuery::default());
    }
}
