//! Event: one protocol message or state change.
//!
//! The event type is fixed at construction. Content is only rewritten by
//! the pruning transform in [`crate::prune`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canonical::ContentHash;
use crate::error::CoreError;
use crate::policy::{rules_for, RedactionRule};
use crate::types::EventType;

/// A JSON object, as used for event content and extra top-level keys.
pub type JsonMap = Map<String, Value>;

/// Top-level keys owned by the event schema.
pub const SCHEMA_FIELDS: &[&str] = &[
    "type",
    "event_id",
    "room_id",
    "user_id",
    "state_key",
    "content",
];

/// A protocol event.
///
/// Top-level keys outside the known schema are preserved in
/// `unrecognized_keys` on deserialization and written back on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The wire event type, e.g. `m.room.member`.
    #[serde(rename = "type")]
    event_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    room_id: Option<String>,

    /// The sending user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,

    /// Present only on state events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state_key: Option<String>,

    #[serde(default)]
    pub(crate) content: JsonMap,

    #[serde(flatten)]
    pub(crate) unrecognized_keys: JsonMap,
}

impl Event {
    /// Create an event with the given type and content.
    pub fn new(event_type: impl Into<String>, content: JsonMap) -> Self {
        Self {
            event_type: event_type.into(),
            event_id: None,
            room_id: None,
            user_id: None,
            state_key: None,
            content,
            unrecognized_keys: JsonMap::new(),
        }
    }

    /// Get the wire event type.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The known kind of this event, if it has one.
    pub fn kind(&self) -> Option<EventType> {
        EventType::from_type_str(&self.event_type)
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn state_key(&self) -> Option<&str> {
        self.state_key.as_deref()
    }

    /// Get the event content.
    pub fn content(&self) -> &JsonMap {
        &self.content
    }

    /// Get the top-level keys not part of the known schema.
    pub fn unrecognized_keys(&self) -> &JsonMap {
        &self.unrecognized_keys
    }

    /// Consume the event, returning its content.
    pub fn into_content(self) -> JsonMap {
        self.content
    }

    /// The redaction rule that applies to this event.
    pub fn redaction_rule(&self) -> &'static RedactionRule {
        rules_for(&self.event_type)
    }

    /// Check whether pruning would leave this event unchanged.
    pub fn is_pruned(&self) -> bool {
        let rule = self.redaction_rule();
        self.unrecognized_keys.is_empty()
            && self.content.iter().all(|(key, value)| rule.retains(key, value))
    }

    /// Hash of the content as it would look after redaction.
    ///
    /// Does not modify the event.
    pub fn redacted_content_hash(&self) -> Result<ContentHash, CoreError> {
        let redacted = self.redaction_rule().apply(&self.content);
        ContentHash::of_content(&redacted)
    }
}

/// Builder for creating events.
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Start building an event of the given type with empty content.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event: Event::new(event_type, JsonMap::new()),
        }
    }

    pub fn event_id(mut self, id: impl Into<String>) -> Self {
        self.event.event_id = Some(id.into());
        self
    }

    pub fn room_id(mut self, id: impl Into<String>) -> Self {
        self.event.room_id = Some(id.into());
        self
    }

    pub fn user_id(mut self, id: impl Into<String>) -> Self {
        self.event.user_id = Some(id.into());
        self
    }

    pub fn state_key(mut self, key: impl Into<String>) -> Self {
        self.event.state_key = Some(key.into());
        self
    }

    /// Replace the whole content object.
    pub fn content(mut self, content: JsonMap) -> Self {
        self.event.content = content;
        self
    }

    /// Set one content key.
    pub fn content_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.event.content.insert(key.into(), value.into());
        self
    }

    /// Set one top-level key outside the known schema.
    ///
    /// Keys in [`SCHEMA_FIELDS`] are ignored; set those through their own
    /// builder methods.
    pub fn unrecognized(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if SCHEMA_FIELDS.contains(&key.as_str()) {
            tracing::debug!(key = %key, "ignoring schema field passed as unrecognized key");
            return self;
        }
        self.event.unrecognized_keys.insert(key, value.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> Event {
        self.event
    }
}
