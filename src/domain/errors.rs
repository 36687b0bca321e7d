//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Caller-input violation. Raised before any request is dispatched.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The service rejected the request. Body is truncated by the adapter.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Network-level failure below HTTP (DNS, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serde(String),
}

impl ClientError {
    /// True for errors raised locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
