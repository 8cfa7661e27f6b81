//! Relay error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::GroqError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Prompt parameter is required")]
    MissingPrompt,

    #[error("GROQ_API_KEY environment variable not set")]
    MissingCredential,

    /// Upstream failure of any kind. The wrapped error keeps the upstream
    /// status and body, but the response body is always the generic message.
    #[error("Upstream error: {0}")]
    Upstream(#[from] GroqError),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingPrompt => StatusCode::BAD_REQUEST,
            RelayError::MissingCredential | RelayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            RelayError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Error body returned to callers: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: RelayError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_prompt_response() {
        let (status, body) = body_of(RelayError::MissingPrompt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Prompt parameter is required"}"#);
    }

    #[tokio::test]
    async fn test_missing_credential_response() {
        let (status, body) = body_of(RelayError::MissingCredential).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"GROQ_API_KEY environment variable not set"}"#);
    }

    #[tokio::test]
    async fn test_upstream_detail_is_withheld() {
        let err = RelayError::Upstream(GroqError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "invalid api key gsk_leaked".to_string(),
        });

        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Internal server error"}"#);
    }
}
