//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::{ApiKey, Settings};
use crate::error::RelayError;
use crate::services::GroqClient;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Cheaply cloneable and read-only after construction.
#[derive(Clone)]
pub struct AppState {
    /// Application settings, including the upstream credential
    pub settings: Arc<Settings>,

    /// Upstream API client
    pub groq: Arc<GroqClient>,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);

        tracing::debug!(base_url = %settings.groq.base_url, "Creating Groq client");
        let groq = Arc::new(GroqClient::new(&settings.groq)?);

        tracing::info!(
            credential_configured = settings.groq.has_api_key(),
            "Application state initialized successfully"
        );

        Ok(Self {
            settings,
            groq,
            start_time: Instant::now(),
        })
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// The upstream credential, or the configuration error every proxy
    /// endpoint returns when it is unset
    pub fn api_key(&self) -> Result<&ApiKey, RelayError> {
        self.settings
            .groq
            .api_key
            .as_ref()
            .ok_or(RelayError::MissingCredential)
    }
}
