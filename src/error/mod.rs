//! Error handling module
//!
//! Every failure a handler can hit is mapped to one of the relay's three
//! response shapes here.

pub mod types;

pub use types::{ErrorResponse, RelayError};
