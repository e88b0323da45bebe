//! Error types for the core crate.
//!
//! Redaction itself never fails. Only canonical encoding of content can.

use thiserror::Error;

/// Errors that can occur while producing canonical content.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("non-canonical value at {path}: {reason}")]
    NonCanonicalValue { path: String, reason: &'static str },

    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::EncodingError(e.to_string())
    }
}
