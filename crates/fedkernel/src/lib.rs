//! # fedkernel
//!
//! The unified API for the event redaction and pagination pipelines of a
//! federated messaging server.
//!
//! ## Overview
//!
//! - **Redaction**: strip an event down to the fields its type keeps, so
//!   every server derives the same canonical content and hash
//! - **Pagination**: validate `dir`/`from`/`to`/`limit` request parameters
//!   into a structured [`PaginationConfig`]
//!
//! The two pipelines share no state.
//!
//! ## Key Concepts
//!
//! - **Redaction rule**: the whitelist of content fields (plus an optional
//!   per-key predicate) kept for one event type. Unknown types keep nothing.
//! - **Pruning**: consumes an event and returns its redacted form. Never fails.
//! - **Stream token**: an opaque cursor into the event stream.
//!
//! ## Usage
//!
//! ```rust
//! use fedkernel::{EventBuilder, Kernel, KernelConfig};
//!
//! let kernel = Kernel::new(KernelConfig::default());
//!
//! let event = EventBuilder::new("m.room.power_levels")
//!     .content_field("default", 50)
//!     .content_field("@alice:example.com", 100)
//!     .content_field("@bob:example.com", "100")
//!     .build();
//! let pruned = kernel.redact(event);
//! assert_eq!(pruned.content().len(), 2);
//!
//! let config = kernel.paginate_query("dir=b&limit=25").unwrap();
//! assert_eq!(config.limit(), 25);
//! ```
//!
//! ## Re-exports
//!
//! - `fedkernel::core` - Events, redaction policy, canonical content
//! - `fedkernel::streams` - Stream tokens and pagination

pub mod client;
pub mod error;
pub mod kernel;

// Re-export component crates
pub use fedkernel_core as core;
pub use fedkernel_streams as streams;

// Re-export main types for convenience
pub use client::ClientError;
pub use error::{KernelError, Result};
pub use kernel::{Kernel, KernelConfig};

// Re-export commonly used component types
pub use fedkernel_core::{
    prune_event, rules_for, ContentHash, Event, EventBuilder, EventType, RedactionRule,
};
pub use fedkernel_streams::{
    Direction, PaginationConfig, PaginationError, RequestParams, StreamToken, StreamTokenCodec,
};
