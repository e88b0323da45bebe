//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{Map, Value};

use fedkernel_core::{Event, EventBuilder, EventType};

/// Generate a JSON leaf value, including the float/bool/string shapes that
/// the power-levels predicate must reject.
pub fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Generate an arbitrary JSON value up to a small depth.
pub fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Generate a content key: whitelisted names, user ids, and noise.
pub fn content_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "membership",
            "creator",
            "join_rule",
            "default",
            "level",
            "kick_level",
            "ban_level",
            "redact_level",
            "aliases",
            "body",
        ])
        .prop_map(String::from),
        "@[a-z]{1,8}:example\\.com",
        "[a-z_]{1,10}",
    ]
}

/// Generate event content.
pub fn content() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(content_key(), json_value(), 0..8)
        .prop_map(|m| m.into_iter().collect())
}

/// Generate a known event type string.
pub fn known_event_type() -> impl Strategy<Value = String> {
    prop::sample::select(EventType::ALL.to_vec()).prop_map(|t| t.as_str().to_string())
}

/// Generate an event type string with no redaction rule.
pub fn unknown_event_type() -> impl Strategy<Value = String> {
    "m\\.[a-z]{1,8}\\.[a-z_]{1,10}".prop_filter("must not be a known type", |s| {
        EventType::from_type_str(s).is_none()
    })
}

/// Generate any event type string.
pub fn event_type() -> impl Strategy<Value = String> {
    prop_oneof![known_event_type(), unknown_event_type()]
}

/// Parameters for generating an event.
#[derive(Debug, Clone)]
pub struct EventParams {
    pub event_type: String,
    pub state_key: Option<String>,
    pub content: Map<String, Value>,
    pub unrecognized: Map<String, Value>,
}

impl Arbitrary for EventParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            event_type(),
            proptest::option::of("@[a-z]{1,8}:example\\.com"),
            content(),
            prop::collection::btree_map("[a-z_]{1,10}", json_leaf(), 0..4),
        )
            .prop_map(|(event_type, state_key, content, unrecognized)| EventParams {
                event_type,
                state_key,
                content,
                unrecognized: unrecognized.into_iter().collect(),
            })
            .boxed()
    }
}

/// Generate an event from parameters.
pub fn event_from_params(params: &EventParams) -> Event {
    let mut builder = EventBuilder::new(params.event_type.clone()).content(params.content.clone());

    if let Some(state_key) = &params.state_key {
        builder = builder.state_key(state_key.clone());
    }
    for (key, value) in &params.unrecognized {
        builder = builder.unrecognized(key.clone(), value.clone());
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedkernel_core::{canonical_content, prune_event, rules_for, ContentHash};
    use fedkernel_streams::{Direction, PaginationConfig, PaginationError};

    use crate::fixtures::request_params;

    proptest! {
        #[test]
        fn test_prune_idempotent(params: EventParams) {
            let once = prune_event(event_from_params(&params));
            let twice = prune_event(once.clone());

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_prune_clears_unrecognized_keys(params: EventParams) {
            let pruned = prune_event(event_from_params(&params));

            prop_assert!(pruned.unrecognized_keys().is_empty());
        }

        #[test]
        fn test_prune_keeps_only_allowed_keys(params: EventParams) {
            let rule = rules_for(&params.event_type);
            let pruned = prune_event(event_from_params(&params));

            for (key, value) in pruned.content() {
                prop_assert!(rule.retains(key, value));
                prop_assert_eq!(params.content.get(key), Some(value));
            }
            // Nothing allowed is lost either.
            for (key, value) in &params.content {
                if rule.retains(key, value) {
                    prop_assert!(pruned.content().contains_key(key));
                }
            }
        }

        #[test]
        fn test_unknown_type_prunes_to_empty(
            event_type in unknown_event_type(),
            content in content(),
        ) {
            let event = EventBuilder::new(event_type).content(content).build();

            prop_assert!(prune_event(event).content().is_empty());
        }

        #[test]
        fn test_prune_preserves_schema_fields(params: EventParams) {
            let pruned = prune_event(event_from_params(&params));

            prop_assert_eq!(pruned.event_type(), params.event_type.as_str());
            prop_assert_eq!(pruned.state_key(), params.state_key.as_deref());
        }

        #[test]
        fn test_redacted_hash_matches_pruned_content(params: EventParams) {
            let event = event_from_params(&params);
            let pruned = prune_event(event.clone());

            // Only canonical content can be hashed; floats are rejected.
            if let Ok(bytes) = canonical_content(pruned.content()) {
                prop_assert_eq!(event.redacted_content_hash().ok(), Some(ContentHash::hash(&bytes)));
            }
        }

        #[test]
        fn test_unknown_direction_rejected(dir in "[a-zA-Z]{0,3}") {
            prop_assume!(dir != "f" && dir != "b");

            let result = PaginationConfig::from_request_parameters(&request_params(&[("dir", &dir)]));
            prop_assert!(matches!(result, Err(PaginationError::InvalidDirection)));
        }

        #[test]
        fn test_direction_normalization_is_two_way(dir in ".{0,4}") {
            let expected = if dir == "f" { Direction::Forward } else { Direction::Backward };

            prop_assert_eq!(PaginationConfig::new(None, None, &dir, 0).direction(), expected);
        }

        #[test]
        fn test_digit_limits_accepted(limit: u64) {
            let raw = limit.to_string();
            let config = PaginationConfig::from_request_parameters(&request_params(&[("limit", &raw)]))
                .map_err(|e| TestCaseError::fail(e.to_string()))?;

            prop_assert_eq!(config.limit(), limit);
        }

        #[test]
        fn test_non_digit_limits_rejected(limit in "[0-9]{0,3}[^0-9][0-9a-z]{0,3}") {
            let result = PaginationConfig::from_request_parameters(&request_params(&[("limit", &limit)]));

            prop_assert!(matches!(result, Err(PaginationError::InvalidLimit)));
        }
    }
}
