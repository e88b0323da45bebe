//! Strong type definitions for event kinds.
//!
//! Event types travel on the wire as strings. The kinds this kernel knows
//! about are a closed enum so the redaction table can be matched
//! exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The event kinds with a defined redaction rule.
///
/// Any type string not listed here is still a valid event type; it simply
/// has no variant and redacts to empty content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// `m.room.member`
    #[serde(rename = "m.room.member")]
    RoomMember,
    /// `m.room.create`
    #[serde(rename = "m.room.create")]
    RoomCreate,
    /// `m.room.join_rules`
    #[serde(rename = "m.room.join_rules")]
    RoomJoinRules,
    /// `m.room.power_levels`
    #[serde(rename = "m.room.power_levels")]
    RoomPowerLevels,
    /// `m.room.add_state_level`
    #[serde(rename = "m.room.add_state_level")]
    RoomAddStateLevel,
    /// `m.room.send_event_level`
    #[serde(rename = "m.room.send_event_level")]
    RoomSendEventLevel,
    /// `m.room.ops_levels`
    #[serde(rename = "m.room.ops_levels")]
    RoomOpsPowerLevels,
    /// `m.room.aliases`
    #[serde(rename = "m.room.aliases")]
    RoomAliases,
}

impl EventType {
    /// Every known kind, in table order.
    pub const ALL: [EventType; 8] = [
        Self::RoomMember,
        Self::RoomCreate,
        Self::RoomJoinRules,
        Self::RoomPowerLevels,
        Self::RoomAddStateLevel,
        Self::RoomSendEventLevel,
        Self::RoomOpsPowerLevels,
        Self::RoomAliases,
    ];

    /// The wire identifier for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoomMember => "m.room.member",
            Self::RoomCreate => "m.room.create",
            Self::RoomJoinRules => "m.room.join_rules",
            Self::RoomPowerLevels => "m.room.power_levels",
            Self::RoomAddStateLevel => "m.room.add_state_level",
            Self::RoomSendEventLevel => "m.room.send_event_level",
            Self::RoomOpsPowerLevels => "m.room.ops_levels",
            Self::RoomAliases => "m.room.aliases",
        }
    }

    /// Look up a kind by its wire identifier.
    ///
    /// Returns `None` for any type this kernel has no rule for.
    pub fn from_type_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown event type string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_str(s).ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_string_roundtrip() {
        for kind in EventType::ALL {
            assert_eq!(EventType::from_type_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_event_type() {
        assert_eq!(EventType::from_type_str("m.room.message"), None);
        assert!("m.room.topic".parse::<EventType>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_identifier() {
        let json = serde_json::to_string(&EventType::RoomOpsPowerLevels).unwrap();
        assert_eq!(json, "\"m.room.ops_levels\"");

        let parsed: EventType = serde_json::from_str("\"m.room.join_rules\"").unwrap();
        assert_eq!(parsed, EventType::RoomJoinRules);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EventType::RoomPowerLevels), "m.room.power_levels");
    }
}
