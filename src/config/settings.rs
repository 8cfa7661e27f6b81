//! Application settings and configuration
//!
//! This module provides configuration management for the relay,
//! loading settings from environment variables with sensible defaults.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Default upstream base URL (OpenAI-compatible surface)
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used when the caller does not name one
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => anyhow::bail!("Invalid environment: {}. Expected: development, staging, or production", s),
        }
    }
}

/// Bearer credential for the upstream provider
///
/// The inner value is only reachable through [`ApiKey::expose`]; `Debug`
/// prints a redacted placeholder so the key cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, treating an empty string as "not set"
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Borrow the raw key for the outbound `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Upstream provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroqConfig {
    /// `GROQ_API_KEY`; `None` makes every proxy request fail with a 500
    #[serde(skip)]
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    pub default_model: String,
    /// Outbound request timeout, 0 disables it
    pub timeout_seconds: u64,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 120,
        }
    }
}

impl GroqConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Main application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub log_level: String,

    // Server settings
    pub host: String,
    pub port: u16,

    // Upstream
    pub groq: GroqConfig,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let settings = Self {
            app_name: env_or_default("APP_NAME", "groq-relay"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: env_or_default("ENVIRONMENT", "development")
                .parse()
                .unwrap_or_default(),
            log_level: env_or_default("LOG_LEVEL", "info"),

            host: env_or_default("HOST", "0.0.0.0"),
            port: env_or_default("PORT", "5000")
                .parse()
                .context("Invalid PORT value")?,

            groq: GroqConfig {
                api_key: env::var("GROQ_API_KEY").ok().and_then(ApiKey::new),
                base_url: env_or_default("GROQ_BASE_URL", DEFAULT_GROQ_BASE_URL),
                default_model: env_or_default("GROQ_DEFAULT_MODEL", DEFAULT_MODEL),
                timeout_seconds: env_or_default("UPSTREAM_TIMEOUT_SECONDS", "120")
                    .parse()
                    .context("Invalid UPSTREAM_TIMEOUT_SECONDS value")?,
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Port cannot be 0");
        }

        if self.groq.base_url.trim().is_empty() {
            anyhow::bail!("GROQ_BASE_URL cannot be empty");
        }

        if self.groq.default_model.trim().is_empty() {
            anyhow::bail!("GROQ_DEFAULT_MODEL cannot be empty");
        }

        Ok(())
    }

    /// Report a missing upstream credential
    ///
    /// A missing key only fails individual requests, so this is logged
    /// rather than rejected. Call it once tracing is installed.
    pub fn log_credential_status(&self) {
        if self.groq.has_api_key() {
            return;
        }

        if self.is_production() {
            tracing::error!("Running in production without GROQ_API_KEY!");
        } else {
            tracing::warn!("GROQ_API_KEY is not set; proxy endpoints will return 500");
        }
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Get the server address string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "groq-relay".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            groq: GroqConfig::default(),
        }
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
