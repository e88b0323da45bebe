//! Golden redaction vectors for cross-implementation verification.
//!
//! Every server in the federation must redact these inputs to exactly the
//! listed canonical bytes. A mismatch means redacted event hashes will not
//! agree across servers.

use fedkernel_core::{canonical_content, prune_event, Event, EventBuilder, JsonMap};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Wire event type.
    pub event_type: &'static str,
    /// Input content, as JSON.
    pub content: &'static str,
    /// Expected canonical JSON of the redacted content.
    pub expected_canonical: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "member keeps membership",
            event_type: "m.room.member",
            content: r#"{"membership": "join", "displayname": "Alice", "avatar_url": "mxc://example.com/a"}"#,
            expected_canonical: r#"{"membership":"join"}"#,
        },
        GoldenVector {
            name: "member without membership",
            event_type: "m.room.member",
            content: r#"{"displayname": "Alice"}"#,
            expected_canonical: r#"{}"#,
        },
        GoldenVector {
            name: "create keeps creator",
            event_type: "m.room.create",
            content: r#"{"creator": "@alice:example.com", "m.federate": true}"#,
            expected_canonical: r#"{"creator":"@alice:example.com"}"#,
        },
        GoldenVector {
            name: "join rules keeps join_rule",
            event_type: "m.room.join_rules",
            content: r#"{"join_rule": "public", "extra": [1, 2]}"#,
            expected_canonical: r#"{"join_rule":"public"}"#,
        },
        GoldenVector {
            name: "power levels keeps default and integer user levels",
            event_type: "m.room.power_levels",
            content: r#"{
                "default": 50,
                "@alice:example.com": 100,
                "@bob:example.com": "100",
                "@carol:example.com": 75.5,
                "@dave:example.com": true,
                "other": 1
            }"#,
            expected_canonical: r#"{"@alice:example.com":100,"default":50}"#,
        },
        GoldenVector {
            name: "power levels default kept whatever its shape",
            event_type: "m.room.power_levels",
            content: r#"{"default": {"nested": [1]}}"#,
            expected_canonical: r#"{"default":{"nested":[1]}}"#,
        },
        GoldenVector {
            name: "add state level keeps level",
            event_type: "m.room.add_state_level",
            content: r#"{"level": 50, "x": 1}"#,
            expected_canonical: r#"{"level":50}"#,
        },
        GoldenVector {
            name: "send event level keeps level",
            event_type: "m.room.send_event_level",
            content: r#"{"level": 0}"#,
            expected_canonical: r#"{"level":0}"#,
        },
        GoldenVector {
            name: "ops levels keeps kick, ban and redact levels",
            event_type: "m.room.ops_levels",
            content: r#"{"redact_level": 75, "kick_level": 50, "ban_level": 60, "topic": "x"}"#,
            expected_canonical: r#"{"ban_level":60,"kick_level":50,"redact_level":75}"#,
        },
        GoldenVector {
            name: "aliases keeps aliases in order",
            event_type: "m.room.aliases",
            content: r##"{"aliases": ["#b:example.com", "#a:example.com"], "servers": ["x"]}"##,
            expected_canonical: r##"{"aliases":["#b:example.com","#a:example.com"]}"##,
        },
        GoldenVector {
            name: "unknown type keeps nothing",
            event_type: "m.room.message",
            content: r#"{"body": "hi", "msgtype": "m.text", "membership": "join"}"#,
            expected_canonical: r#"{}"#,
        },
    ]
}

/// Build the input event for a vector.
///
/// Panics if the vector's content is not a JSON object; vectors are static
/// test data.
pub fn event_from_vector(vector: &GoldenVector) -> Event {
    let content: JsonMap = serde_json::from_str(vector.content)
        .unwrap_or_else(|e| panic!("vector '{}' has invalid content: {}", vector.name, e));

    EventBuilder::new(vector.event_type)
        .content(content)
        .unrecognized("origin_server_ts", 1_408_000_000_000u64)
        .build()
}

/// Redact a vector's event and return its canonical content as a string.
pub fn redact_vector(vector: &GoldenVector) -> String {
    let pruned = prune_event(event_from_vector(vector));
    let bytes = canonical_content(pruned.content())
        .unwrap_or_else(|e| panic!("vector '{}' is not canonical: {}", vector.name, e));
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, actual)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = redact_vector(v);
            let matches = actual == v.expected_canonical;
            (v.name.to_string(), matches, actual)
        })
        .collect()
}
