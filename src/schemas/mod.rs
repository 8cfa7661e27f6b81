//! Schema module
//!
//! Contains wire types for the upstream provider.

pub mod groq;
