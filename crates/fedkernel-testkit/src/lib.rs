//! # fedkernel testkit
//!
//! Testing utilities for fedkernel.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known redaction inputs with their expected canonical output
//! - **Generators**: Proptest strategies for events and request parameters
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the exact redacted bytes every server must agree on:
//!
//! ```rust
//! use fedkernel_testkit::vectors::{all_vectors, redact_vector};
//!
//! for vector in all_vectors() {
//!     assert_eq!(redact_vector(&vector), vector.expected_canonical);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use fedkernel_core::prune_event;
//! use fedkernel_testkit::generators::{event_from_params, EventParams};
//!
//! proptest! {
//!     #[test]
//!     fn prune_is_idempotent(params: EventParams) {
//!         let once = prune_event(event_from_params(&params));
//!         prop_assert_eq!(once.clone(), prune_event(once));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use fedkernel_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! let event = fixture.make_member("@bob:example.com", "join");
//! assert_eq!(event.state_key(), Some("@bob:example.com"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{request_params, TestFixture};
pub use generators::{event_from_params, EventParams};
pub use vectors::{all_vectors, event_from_vector, redact_vector, verify_all_vectors, GoldenVector};
