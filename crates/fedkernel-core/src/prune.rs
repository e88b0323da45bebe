//! Event pruning: the redaction transform.
//!
//! Pruning consumes the event. Callers that still need the original must
//! clone it first. The result depends only on the event's type and content.

use crate::event::{Event, JsonMap};
use crate::policy::rules_for;

/// Prune an event down to the fields its type's redaction rule keeps.
///
/// All top-level keys outside the known schema are dropped, and the content
/// is reduced to the whitelisted fields (plus any keys the type's predicate
/// accepts). Known schema fields such as `type`, `room_id` and `state_key`
/// are kept.
///
/// This never fails: unknown event types prune to empty content. Pruning an
/// already-pruned event returns it unchanged.
pub fn prune_event(mut event: Event) -> Event {
    let rule = rules_for(event.event_type());

    event.unrecognized_keys = JsonMap::new();
    let content = std::mem::take(&mut event.content);
    let original_len = content.len();
    event.content = rule.apply_owned(content);

    tracing::debug!(
        event_type = event.event_type(),
        retained = event.content.len(),
        dropped = original_len - event.content.len(),
        "pruned event"
    );

    event
}
