//! Configuration management module
//!
//! This module handles loading and validating application configuration
//! from environment variables and .env files.

pub mod settings;

pub use settings::{
    ApiKey, Environment, GroqConfig, Settings, DEFAULT_GROQ_BASE_URL, DEFAULT_MODEL,
};
