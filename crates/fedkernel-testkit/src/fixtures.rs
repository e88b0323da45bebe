//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use fedkernel_core::{Event, EventBuilder};
use fedkernel_streams::RequestParams;

/// A test fixture for one room and one sender.
pub struct TestFixture {
    pub room_id: String,
    pub user_id: String,
    next_event: u64,
}

impl TestFixture {
    /// Create a fixture with default room and user ids.
    pub fn new() -> Self {
        Self::with_ids("!room:example.com", "@alice:example.com")
    }

    pub fn with_ids(room_id: &str, user_id: &str) -> Self {
        Self {
            room_id: room_id.to_string(),
            user_id: user_id.to_string(),
            next_event: 1,
        }
    }

    /// Start an event of the given type with room, sender and a fresh id.
    pub fn builder(&mut self, event_type: &str) -> EventBuilder {
        let event_id = format!("${}:example.com", self.next_event);
        self.next_event += 1;
        EventBuilder::new(event_type)
            .event_id(event_id)
            .room_id(self.room_id.clone())
            .user_id(self.user_id.clone())
    }

    /// A membership event for `target`, with profile fields that redaction
    /// should strip.
    pub fn make_member(&mut self, target: &str, membership: &str) -> Event {
        self.builder("m.room.member")
            .state_key(target)
            .content_field("membership", membership)
            .content_field("displayname", "Display Name")
            .content_field("avatar_url", "mxc://example.com/avatar")
            .build()
    }

    /// A power levels event with the given default and user levels.
    pub fn make_power_levels(&mut self, default: i64, users: &[(&str, i64)]) -> Event {
        let mut builder = self
            .builder("m.room.power_levels")
            .state_key("")
            .content_field("default", default);
        for (user, level) in users {
            builder = builder.content_field(*user, *level);
        }
        builder.build()
    }

    /// A plain message event. Its type has no redaction rule.
    pub fn make_message(&mut self, body: &str) -> Event {
        self.builder("m.room.message")
            .content_field("msgtype", "m.text")
            .content_field("body", body)
            .build()
    }

    /// An event of any type carrying extra content and extra top-level keys.
    pub fn make_with_junk(&mut self, event_type: &str) -> Event {
        self.builder(event_type)
            .content_field("junk", "should be removed")
            .content_field("nested", serde_json::json!({"a": {"b": [1, 2, 3]}}))
            .unrecognized("origin", "example.com")
            .unrecognized("age", 1234)
            .build()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build request parameters from name/value pairs. Repeated names are kept.
pub fn request_params(pairs: &[(&str, &str)]) -> RequestParams {
    pairs.iter().copied().collect()
}
