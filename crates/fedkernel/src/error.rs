//! Error types for the Kernel.

use fedkernel_core::CoreError;
use fedkernel_streams::PaginationError;
use thiserror::Error;

use crate::client::ClientError;

/// Errors that can occur during Kernel operations.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Canonical content error.
    #[error("canonical content error: {0}")]
    Core(#[from] CoreError),

    /// Pagination request rejected.
    #[error("pagination error: {0}")]
    Pagination(#[from] PaginationError),
}

impl KernelError {
    /// Convert to the error body sent back to the client.
    ///
    /// Internal detail (token parse reasons, catch-all sources) is not
    /// included.
    pub fn to_client_error(&self) -> ClientError {
        match self {
            KernelError::Pagination(e) => ClientError::from(e),
            KernelError::Core(_) => ClientError::internal(),
        }
    }
}

/// Result type for Kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
