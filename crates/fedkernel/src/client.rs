//! Client-facing error bodies.
//!
//! Errors are returned to clients as a JSON object with an `errcode` and a
//! human-readable `error` message, alongside an HTTP status.

use serde::Serialize;
use std::fmt;

use fedkernel_streams::PaginationError;

/// Error code for failures without a more specific code.
pub const M_UNKNOWN: &str = "M_UNKNOWN";

/// An error as presented to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientError {
    /// HTTP status. Not part of the JSON body.
    #[serde(skip)]
    pub status: u16,
    pub errcode: String,
    #[serde(rename = "error")]
    pub message: String,
}

impl ClientError {
    pub fn new(status: u16, errcode: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            errcode: errcode.into(),
            message: message.into(),
        }
    }

    /// A 500 with no detail.
    pub fn internal() -> Self {
        Self::new(500, M_UNKNOWN, "Internal server error")
    }

    /// Check if this is a client fault (4xx).
    pub fn is_client_fault(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

impl From<&PaginationError> for ClientError {
    fn from(e: &PaginationError) -> Self {
        Self::new(e.status_code(), M_UNKNOWN, e.to_string())
    }
}

impl From<PaginationError> for ClientError {
    fn from(e: PaginationError) -> Self {
        Self::from(&e)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.errcode, self.message)
    }
}
