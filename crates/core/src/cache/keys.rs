/// Returns the cache key for the full event listing.
///
/// Exactly one listing exists, so the key is a fixed string.
pub fn events_key() -> String {
    "events".to_string()
}

/// Returns the cache key for a single event.
pub fn event_key(event_id: i64) -> String {
    format!("event:{}", event_id)
}
