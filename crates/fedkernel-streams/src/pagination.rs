//! Pagination requests: validating `dir`, `from`, `to` and `limit`.
//!
//! Validation runs in a fixed order and stops at the first failure:
//!
//! 1. Each parameter may be supplied at most once.
//! 2. `dir` must be `f` or `b`.
//! 3. `from` must parse as a token, or be the legacy `END` alias.
//! 4. `to` must parse as a token.
//! 5. `limit` must be all decimal digits.
//! 6. The parts are assembled into a [`PaginationConfig`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PaginationError;
use crate::params::RequestParams;
use crate::token::{DefaultTokenCodec, StreamToken, StreamTokenCodec};

/// Marker for forward pagination (oldest to newest).
pub const FORWARD_MARKER: &str = "f";

/// Marker for backward pagination (newest to oldest).
pub const BACKWARD_MARKER: &str = "b";

/// Legacy `from` value meaning "no lower bound".
pub const END_SENTINEL: &str = "END";

/// `limit` used when the parameter is absent.
pub const DEFAULT_LIMIT: &str = "0";

/// Direction to walk the stream from the reference token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "f")]
    Forward,
    #[serde(rename = "b")]
    Backward,
}

impl Direction {
    /// Strictly parse a direction marker.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            FORWARD_MARKER => Some(Direction::Forward),
            BACKWARD_MARKER => Some(Direction::Backward),
            _ => None,
        }
    }

    /// Collapse any marker to a direction: the forward marker is Forward,
    /// everything else is Backward.
    pub fn normalize(marker: &str) -> Self {
        if marker == FORWARD_MARKER {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// The wire marker for this direction.
    pub fn as_marker(self) -> &'static str {
        match self {
            Direction::Forward => FORWARD_MARKER,
            Direction::Backward => BACKWARD_MARKER,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_marker())
    }
}

/// A validated pagination request. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationConfig {
    from_token: Option<StreamToken>,
    to_token: Option<StreamToken>,
    direction: Direction,
    limit: u64,
}

impl PaginationConfig {
    /// Assemble a config from already-validated parts.
    ///
    /// `direction` is normalized: anything other than `"f"` becomes
    /// [`Direction::Backward`].
    pub fn new(
        from_token: Option<StreamToken>,
        to_token: Option<StreamToken>,
        direction: &str,
        limit: u64,
    ) -> Self {
        Self {
            from_token,
            to_token,
            direction: Direction::normalize(direction),
            limit,
        }
    }

    /// Validate request parameters using the default token codec.
    pub fn from_request_parameters(params: &RequestParams) -> Result<Self, PaginationError> {
        Self::from_request_parameters_with(&DefaultTokenCodec, params)
    }

    /// Validate a raw query string using the default token codec.
    pub fn from_query_string(query: &str) -> Result<Self, PaginationError> {
        Self::from_request_parameters(&RequestParams::from_query_string(query))
    }

    /// Validate request parameters, parsing cursors with `codec`.
    pub fn from_request_parameters_with<C>(
        codec: &C,
        params: &RequestParams,
    ) -> Result<Self, PaginationError>
    where
        C: StreamTokenCodec + ?Sized,
    {
        // 1. Single-valued parameters
        let direction = single_param(params, "dir")?.unwrap_or(FORWARD_MARKER);
        let from_raw = single_param(params, "from")?;
        let to_raw = single_param(params, "to")?;
        let limit_raw = single_param(params, "limit")?.unwrap_or(DEFAULT_LIMIT);

        // 2. Direction
        if Direction::from_marker(direction).is_none() {
            tracing::warn!(dir = direction, "rejecting pagination request: invalid direction");
            return Err(PaginationError::InvalidDirection);
        }

        // 3. From token. An empty value is the same as no value.
        let from_token = match from_raw {
            Some(END_SENTINEL) | Some("") | None => None,
            Some(raw) => Some(codec.parse(raw).map_err(|e| {
                tracing::warn!(error = %e, "rejecting pagination request: invalid 'from' token");
                PaginationError::InvalidFromToken(e)
            })?),
        };

        // 4. To token
        let to_token = match to_raw {
            Some("") | None => None,
            Some(raw) => Some(codec.parse(raw).map_err(|e| {
                tracing::warn!(error = %e, "rejecting pagination request: invalid 'to' token");
                PaginationError::InvalidToToken(e)
            })?),
        };

        // 5. Limit
        if limit_raw.is_empty() || !limit_raw.bytes().all(|b| b.is_ascii_digit()) {
            tracing::warn!(limit = limit_raw, "rejecting pagination request: invalid limit");
            return Err(PaginationError::InvalidLimit);
        }

        // 6. Assembly
        Self::assemble(from_token, to_token, direction, limit_raw).map_err(|e| {
            tracing::error!(error = %e, "failed to create pagination config");
            PaginationError::InvalidRequest(e)
        })
    }

    fn assemble(
        from_token: Option<StreamToken>,
        to_token: Option<StreamToken>,
        direction: &str,
        limit: &str,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let limit: u64 = limit.parse()?;
        Ok(Self::new(from_token, to_token, direction, limit))
    }

    /// Lower bound of the range. `None` means the start of visible history.
    pub fn from_token(&self) -> Option<&StreamToken> {
        self.from_token.as_ref()
    }

    /// Upper bound of the range. `None` means unbounded.
    pub fn to_token(&self) -> Option<&StreamToken> {
        self.to_token.as_ref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Requested page size. `0` means no explicit cap.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(None, None, FORWARD_MARKER, 0)
    }
}

impl fmt::Display for PaginationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<PaginationConfig from_tok=")?;
        write_token(f, self.from_token.as_ref())?;
        write!(f, ", to_tok=")?;
        write_token(f, self.to_token.as_ref())?;
        write!(f, ", direction={}, limit={}>", self.direction, self.limit)
    }
}

fn write_token(f: &mut fmt::Formatter<'_>, token: Option<&StreamToken>) -> fmt::Result {
    match token {
        Some(token) => write!(f, "{}", token),
        None => write!(f, "None"),
    }
}

/// Get at most one value for `name`.
fn single_param<'a>(
    params: &'a RequestParams,
    name: &'static str,
) -> Result<Option<&'a str>, PaginationError> {
    match params.get_all(name) {
        [] => Ok(None),
        [value] => Ok(Some(value.as_str())),
        _ => {
            tracing::warn!(param = name, "rejecting pagination request: duplicate parameter");
            Err(PaginationError::DuplicateParameter(name))
        }
    }
}
