//! Services module
//!
//! Contains external service integrations.

pub mod groq;

pub use groq::{GroqClient, GroqError};
