//! Error types for stream tokens and pagination requests.

use thiserror::Error;

/// A cursor string that is not a valid encoded stream token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed stream token {token:?}: {reason}")]
pub struct MalformedToken {
    pub token: String,
    pub reason: &'static str,
}

impl MalformedToken {
    pub(crate) fn new(token: &str, reason: &'static str) -> Self {
        Self {
            token: token.to_string(),
            reason,
        }
    }
}

/// Errors rejecting a pagination request.
///
/// Every variant is a client fault and maps to HTTP 400. The `Display`
/// output is the message shown to the client.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("{0} must be specified only once")]
    DuplicateParameter(&'static str),

    #[error("'dir' parameter is invalid.")]
    InvalidDirection,

    #[error("'from' parameter is invalid")]
    InvalidFromToken(#[source] MalformedToken),

    #[error("'to' parameter is invalid")]
    InvalidToToken(#[source] MalformedToken),

    #[error("'limit' parameter must be an integer.")]
    InvalidLimit,

    /// Catch-all for failures while assembling the config. The source is
    /// kept for diagnostics and never rendered in the message.
    #[error("Invalid request.")]
    InvalidRequest(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PaginationError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// The request parameter at fault, if one can be named.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            PaginationError::DuplicateParameter(name) => Some(name),
            PaginationError::InvalidDirection => Some("dir"),
            PaginationError::InvalidFromToken(_) => Some("from"),
            PaginationError::InvalidToToken(_) => Some("to"),
            PaginationError::InvalidLimit => Some("limit"),
            PaginationError::InvalidRequest(_) => None,
        }
    }
}
