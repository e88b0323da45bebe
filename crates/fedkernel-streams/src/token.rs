//! Stream tokens: opaque, ordered positions in the event stream.
//!
//! A token encodes one key per stream, joined by `_`:
//!
//! ```text
//! <events_key>_<presence_key>
//! ```
//!
//! The events key is either a live stream position `s<N>` or a topological
//! position `t<T>-<N>`. The presence key is a plain decimal integer.
//! Pagination code treats tokens as opaque and only ever goes through
//! [`StreamTokenCodec::parse`].

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::MalformedToken;

/// Separator between the per-stream keys of a token.
pub const TOKEN_SEPARATOR: char = '_';

/// A position in the room event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomStreamPosition {
    /// Position by stream ordering: `s<stream>`.
    Live { stream: u64 },
    /// Position by topological depth, tie-broken by stream ordering:
    /// `t<topological>-<stream>`.
    Topological { topological: u64, stream: u64 },
}

impl RoomStreamPosition {
    /// The stream ordering component.
    pub fn stream(&self) -> u64 {
        match self {
            RoomStreamPosition::Live { stream } => *stream,
            RoomStreamPosition::Topological { stream, .. } => *stream,
        }
    }

    fn parse(raw: &str, token: &str) -> Result<Self, MalformedToken> {
        if let Some(rest) = raw.strip_prefix('s') {
            let stream = parse_decimal(rest)
                .ok_or_else(|| MalformedToken::new(token, "invalid live stream position"))?;
            return Ok(RoomStreamPosition::Live { stream });
        }

        if let Some(rest) = raw.strip_prefix('t') {
            let (topo, stream) = rest
                .split_once('-')
                .ok_or_else(|| MalformedToken::new(token, "topological position missing '-'"))?;
            let topological = parse_decimal(topo)
                .ok_or_else(|| MalformedToken::new(token, "invalid topological depth"))?;
            let stream = parse_decimal(stream)
                .ok_or_else(|| MalformedToken::new(token, "invalid topological stream position"))?;
            return Ok(RoomStreamPosition::Topological {
                topological,
                stream,
            });
        }

        Err(MalformedToken::new(token, "unknown events key prefix"))
    }
}

impl fmt::Display for RoomStreamPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStreamPosition::Live { stream } => write!(f, "s{}", stream),
            RoomStreamPosition::Topological {
                topological,
                stream,
            } => write!(f, "t{}-{}", topological, stream),
        }
    }
}

/// A structured stream position. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamToken {
    /// Position in the room event stream.
    pub events_key: RoomStreamPosition,
    /// Position in the presence stream.
    pub presence_key: u64,
}

impl StreamToken {
    /// The token at the very start of every stream.
    pub const START: Self = Self {
        events_key: RoomStreamPosition::Live { stream: 0 },
        presence_key: 0,
    };

    pub fn new(events_key: RoomStreamPosition, presence_key: u64) -> Self {
        Self {
            events_key,
            presence_key,
        }
    }

    /// Copy of this token with the events key replaced.
    pub fn with_events_key(self, events_key: RoomStreamPosition) -> Self {
        Self { events_key, ..self }
    }

    /// Copy of this token with the presence key replaced.
    pub fn with_presence_key(self, presence_key: u64) -> Self {
        Self {
            presence_key,
            ..self
        }
    }
}

impl fmt::Display for StreamToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.events_key, TOKEN_SEPARATOR, self.presence_key)
    }
}

impl FromStr for StreamToken {
    type Err = MalformedToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DefaultTokenCodec.parse(s)
    }
}

impl Serialize for StreamToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StreamToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Decodes cursor strings into stream tokens.
///
/// Implementations must be pure: the same input always yields the same
/// result.
pub trait StreamTokenCodec {
    /// Parse a cursor string, failing on anything that is not a valid
    /// encoded token.
    fn parse(&self, raw: &str) -> Result<StreamToken, MalformedToken>;
}

/// The standard `<events_key>_<presence_key>` codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenCodec;

impl StreamTokenCodec for DefaultTokenCodec {
    fn parse(&self, raw: &str) -> Result<StreamToken, MalformedToken> {
        if raw.is_empty() {
            return Err(MalformedToken::new(raw, "empty token"));
        }

        let mut parts = raw.split(TOKEN_SEPARATOR);
        let (events, presence) = match (parts.next(), parts.next(), parts.next()) {
            (Some(events), Some(presence), None) => (events, presence),
            _ => return Err(MalformedToken::new(raw, "expected exactly two keys")),
        };

        let events_key = RoomStreamPosition::parse(events, raw)?;
        let presence_key = parse_decimal(presence)
            .ok_or_else(|| MalformedToken::new(raw, "invalid presence key"))?;

        Ok(StreamToken {
            events_key,
            presence_key,
        })
    }
}

/// Parse a non-empty, all-ASCII-digit string. Rejects signs and overflow.
fn parse_decimal(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_live_token() {
        let token: StreamToken = "s42_7".parse().unwrap();
        assert_eq!(token.events_key, RoomStreamPosition::Live { stream: 42 });
        assert_eq!(token.presence_key, 7);
        assert_eq!(token.events_key.stream(), 42);
    }

    #[test]
    fn test_parse_topological_token() {
        let token: StreamToken = "t3-120_0".parse().unwrap();
        assert_eq!(
            token.events_key,
            RoomStreamPosition::Topological {
                topological: 3,
                stream: 120
            }
        );
        assert_eq!(token.to_string(), "t3-120_0");
    }

    #[test]
    fn test_rejects_malformed() {
        let bad = [
            "",
            "s1",
            "s1_2_3",
            "x1_2",
            "s_2",
            "s-1_2",
            "s+1_2",
            "t1_2",
            "t-5_2",
            "t1-_2",
            "s1_",
            "s1_abc",
            "END",
            "s99999999999999999999999_0",
        ];
        for raw in bad {
            assert!(DefaultTokenCodec.parse(raw).is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_malformed_token_carries_input() {
        let err = DefaultTokenCodec.parse("q9_1").unwrap_err();
        assert_eq!(err.token, "q9_1");
        assert_eq!(err.reason, "unknown events key prefix");
    }

    #[test]
    fn test_with_key_replacement() {
        let token = StreamToken::START
            .with_events_key(RoomStreamPosition::Live { stream: 9 })
            .with_presence_key(4);
        assert_eq!(token.to_string(), "s9_4");
        assert_eq!(StreamToken::START.to_string(), "s0_0");
    }

    #[test]
    fn test_serde_as_string() {
        let token: StreamToken = "s5_6".parse().unwrap();
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"s5_6\"");

        let back: StreamToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);

        assert!(serde_json::from_str::<StreamToken>("\"nope\"").is_err());
    }

    fn position() -> impl Strategy<Value = RoomStreamPosition> {
        prop_oneof![
            any::<u64>().prop_map(|stream| RoomStreamPosition::Live { stream }),
            (any::<u64>(), any::<u64>()).prop_map(|(topological, stream)| {
                RoomStreamPosition::Topological {
                    topological,
                    stream,
                }
            }),
        ]
    }

    proptest! {
        #[test]
        fn test_display_parses_back(events_key in position(), presence_key in any::<u64>()) {
            let token = StreamToken::new(events_key, presence_key);
            prop_assert_eq!(DefaultTokenCodec.parse(&token.to_string()), Ok(token));
        }
    }
}
