//! # fedkernel core
//!
//! Pure primitives for event redaction: the event model, the per-type
//! redaction policy, the pruning transform, and canonical content hashing.
//!
//! This crate contains no I/O and no shared mutable state. The redaction
//! table is `'static` and read-only, so every function here is safe to call
//! from any thread.
//!
//! ## Key Types
//!
//! - [`Event`] - A protocol event: type, content, and extra top-level keys
//! - [`EventType`] - The closed set of kinds with a redaction rule
//! - [`RedactionRule`] - Fields (and predicate) retained for one kind
//! - [`ContentHash`] - Blake3 hash of canonical content
//!
//! ## Redaction
//!
//! ```rust
//! use fedkernel_core::{prune_event, EventBuilder};
//!
//! let event = EventBuilder::new("m.room.member")
//!     .content_field("membership", "join")
//!     .content_field("displayname", "Alice")
//!     .build();
//!
//! let pruned = prune_event(event);
//! assert_eq!(pruned.content().len(), 1);
//! ```

pub mod canonical;
pub mod error;
pub mod event;
pub mod policy;
pub mod prune;
pub mod types;

pub use canonical::{canonical_content, canonical_json, ContentHash};
pub use error::CoreError;
pub use event::{Event, EventBuilder, JsonMap, SCHEMA_FIELDS};
pub use policy::{is_user_power_level, rules_for, KeyPredicate, RedactionRule, EMPTY_RULE};
pub use prune::prune_event;
pub use types::{EventType, UnknownEventType};
