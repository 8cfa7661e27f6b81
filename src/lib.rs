//! Groq relay library
//!
//! An HTTP relay that forwards chat and model-listing requests to the Groq
//! API, injecting a server-held credential.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod schemas;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use error::RelayError;
pub use server::App;
