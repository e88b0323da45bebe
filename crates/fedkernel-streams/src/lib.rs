//! # fedkernel streams
//!
//! Stream tokens and pagination request validation.
//!
//! A client pages through a room's event stream by sending `dir`, `from`,
//! `to` and `limit` parameters. This crate turns those raw, possibly
//! repeated, string values into a validated [`PaginationConfig`], or a
//! [`PaginationError`] describing the first thing wrong with them.
//!
//! Cursor strings are decoded through the [`StreamTokenCodec`] trait; the
//! standard encoding is provided by [`DefaultTokenCodec`].
//!
//! ```rust
//! use fedkernel_streams::{Direction, PaginationConfig, RequestParams};
//!
//! let params: RequestParams = [("dir", "b"), ("limit", "25")].into_iter().collect();
//! let config = PaginationConfig::from_request_parameters(&params).unwrap();
//!
//! assert_eq!(config.direction(), Direction::Backward);
//! assert_eq!(config.limit(), 25);
//! ```

pub mod error;
pub mod pagination;
pub mod params;
pub mod token;

pub use error::{MalformedToken, PaginationError};
pub use pagination::{
    Direction, PaginationConfig, BACKWARD_MARKER, DEFAULT_LIMIT, END_SENTINEL, FORWARD_MARKER,
};
pub use params::RequestParams;
pub use token::{DefaultTokenCodec, RoomStreamPosition, StreamToken, StreamTokenCodec, TOKEN_SEPARATOR};
