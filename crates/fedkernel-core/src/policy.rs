//! The redaction policy: which content fields survive redaction, per type.
//!
//! This table is part of the federation wire contract. Every server must
//! strip exactly the same fields so that redacted events hash identically.
//! Field names here are protocol-significant; do not rename them.

use serde_json::{Map, Value};

use crate::types::EventType;

/// Decides whether a content key outside the fixed whitelist is retained.
pub type KeyPredicate = fn(&str, &Value) -> bool;

/// The redaction rule for one event type.
#[derive(Debug, Clone, Copy)]
pub struct RedactionRule {
    /// The kind this rule applies to. `None` for the empty fallback rule.
    pub event_type: Option<EventType>,

    /// Content keys kept verbatim when present.
    pub fixed_fields: &'static [&'static str],

    /// Additional per-key rule, evaluated against every content entry.
    pub predicate: Option<KeyPredicate>,
}

/// Rule applied to any event type without an entry: nothing survives.
pub const EMPTY_RULE: RedactionRule = RedactionRule {
    event_type: None,
    fixed_fields: &[],
    predicate: None,
};

static ROOM_MEMBER: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomMember),
    fixed_fields: &["membership"],
    predicate: None,
};

static ROOM_CREATE: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomCreate),
    fixed_fields: &["creator"],
    predicate: None,
};

static ROOM_JOIN_RULES: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomJoinRules),
    fixed_fields: &["join_rule"],
    predicate: None,
};

static ROOM_POWER_LEVELS: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomPowerLevels),
    fixed_fields: &["default"],
    predicate: Some(is_user_power_level),
};

static ROOM_ADD_STATE_LEVEL: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomAddStateLevel),
    fixed_fields: &["level"],
    predicate: None,
};

static ROOM_SEND_EVENT_LEVEL: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomSendEventLevel),
    fixed_fields: &["level"],
    predicate: None,
};

static ROOM_OPS_POWER_LEVELS: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomOpsPowerLevels),
    fixed_fields: &["kick_level", "ban_level", "redact_level"],
    predicate: None,
};

static ROOM_ALIASES: RedactionRule = RedactionRule {
    event_type: Some(EventType::RoomAliases),
    fixed_fields: &["aliases"],
    predicate: None,
};

static EMPTY: RedactionRule = EMPTY_RULE;

/// A user power level: an `@`-prefixed key holding a JSON integer.
///
/// Floats, booleans and numeric strings do not qualify. Integers are
/// limited to the `i64`/`u64` range: `serde_json` reads a larger literal
/// such as `100000000000000000000` as a float, so it is dropped.
pub fn is_user_power_level(key: &str, value: &Value) -> bool {
    key.starts_with('@') && matches!(value, Value::Number(n) if n.is_i64() || n.is_u64())
}

impl EventType {
    /// The redaction rule for this kind.
    pub fn redaction_rule(self) -> &'static RedactionRule {
        match self {
            EventType::RoomMember => &ROOM_MEMBER,
            EventType::RoomCreate => &ROOM_CREATE,
            EventType::RoomJoinRules => &ROOM_JOIN_RULES,
            EventType::RoomPowerLevels => &ROOM_POWER_LEVELS,
            EventType::RoomAddStateLevel => &ROOM_ADD_STATE_LEVEL,
            EventType::RoomSendEventLevel => &ROOM_SEND_EVENT_LEVEL,
            EventType::RoomOpsPowerLevels => &ROOM_OPS_POWER_LEVELS,
            EventType::RoomAliases => &ROOM_ALIASES,
        }
    }
}

/// Look up the rule for a wire event type.
///
/// Unknown types are not an error; they get [`EMPTY_RULE`].
pub fn rules_for(event_type: &str) -> &'static RedactionRule {
    match EventType::from_type_str(event_type) {
        Some(kind) => kind.redaction_rule(),
        None => &EMPTY,
    }
}

impl RedactionRule {
    /// Whether this is the fallback rule that retains nothing.
    pub fn is_empty(&self) -> bool {
        self.fixed_fields.is_empty() && self.predicate.is_none()
    }

    /// Whether a single content entry survives under this rule.
    pub fn retains(&self, key: &str, value: &Value) -> bool {
        self.fixed_fields.iter().any(|field| *field == key)
            || self.predicate.is_some_and(|predicate| predicate(key, value))
    }

    /// Apply this rule to borrowed `content`, returning the surviving entries.
    ///
    /// Keys are evaluated independently. Fixed fields absent from the input
    /// are simply omitted.
    pub fn apply(&self, content: &Map<String, Value>) -> Map<String, Value> {
        content
            .iter()
            .filter(|(key, value)| self.retains(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Like [`apply`](Self::apply), but consumes `content` and moves the
    /// surviving values instead of cloning them.
    pub fn apply_owned(&self, content: Map<String, Value>) -> Map<String, Value> {
        content
            .into_iter()
            .filter(|(key, value)| self.retains(key, value))
            .collect()
    }
}
