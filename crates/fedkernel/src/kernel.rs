//! The Kernel: unified API over redaction and pagination.
//!
//! The Kernel holds no mutable state. It can be shared across threads
//! behind an `Arc` and called concurrently.

use fedkernel_core::{prune_event, ContentHash, Event};
use fedkernel_streams::{DefaultTokenCodec, PaginationConfig, RequestParams, StreamTokenCodec};

use crate::error::Result;

/// Configuration for the Kernel.
#[derive(Debug, Clone, Default)]
pub struct KernelConfig {
    /// Upper bound applied by [`Kernel::effective_limit`]. `None` means no
    /// server-side cap.
    pub max_limit: Option<u64>,
}

/// The main Kernel struct.
///
/// Provides a unified API for:
/// - Redacting events
/// - Hashing redacted content
/// - Validating pagination requests
pub struct Kernel<C: StreamTokenCodec = DefaultTokenCodec> {
    /// Cursor codec used for `from` and `to`.
    codec: C,
    /// Configuration.
    config: KernelConfig,
}

impl Kernel<DefaultTokenCodec> {
    /// Create a kernel using the standard token encoding.
    pub fn new(config: KernelConfig) -> Self {
        Self::with_codec(DefaultTokenCodec, config)
    }
}

impl Default for Kernel<DefaultTokenCodec> {
    fn default() -> Self {
        Self::new(KernelConfig::default())
    }
}

impl<C: StreamTokenCodec> Kernel<C> {
    /// Create a kernel with a custom token codec.
    pub fn with_codec(codec: C, config: KernelConfig) -> Self {
        Self { codec, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Redaction
    // ─────────────────────────────────────────────────────────────────────────

    /// Redact an event, consuming it.
    ///
    /// Clone the event first if the original is still needed.
    pub fn redact(&self, event: Event) -> Event {
        prune_event(event)
    }

    /// Redact an event and hash the resulting content.
    pub fn redact_and_hash(&self, event: Event) -> Result<(Event, ContentHash)> {
        let pruned = prune_event(event);
        let hash = ContentHash::of_content(pruned.content())?;
        Ok((pruned, hash))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate pagination request parameters.
    pub fn paginate(&self, params: &RequestParams) -> Result<PaginationConfig> {
        let config = PaginationConfig::from_request_parameters_with(&self.codec, params)?;
        tracing::debug!(%config, "validated pagination request");
        Ok(config)
    }

    /// Validate a raw query string.
    pub fn paginate_query(&self, query: &str) -> Result<PaginationConfig> {
        self.paginate(&RequestParams::from_query_string(query))
    }

    /// The page size to actually use for a validated request.
    ///
    /// A requested limit of `0` means "no explicit cap" and yields the
    /// configured maximum (or `None` if there is none). Non-zero limits are
    /// clamped to the maximum.
    pub fn effective_limit(&self, config: &PaginationConfig) -> Option<u64> {
        match (config.limit(), self.config.max_limit) {
            (0, max) => max,
            (limit, Some(max)) => Some(limit.min(max)),
            (limit, None) => Some(limit),
        }
    }
}
