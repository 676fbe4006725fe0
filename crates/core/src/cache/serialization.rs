//! Pure functions for serializing/deserializing events to/from cache bytes.
//!
//! JSON is used for cache storage so cached values stay human-readable and
//! byte-identical to the response the data source would produce.

use thiserror::Error;

use crate::events::Event;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a single event to JSON bytes.
pub fn serialize_event(event: &Event) -> Result<Vec<u8>> {
    serde_json::to_vec(event).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a single event.
pub fn deserialize_event(bytes: &[u8]) -> Result<Event> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes an ordered event list to JSON bytes.
pub fn serialize_events(events: &[Event]) -> Result<Vec<u8>> {
    serde_json::to_vec(events).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an ordered event list.
pub fn deserialize_events(bytes: &[u8]) -> Result<Vec<Event>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_roundtrip_event() {
        let event = Event::new(1, "Event 1", date(2023, 1, 1)).with_location("Main Hall");

        let bytes = serialize_event(&event).expect("serialize should succeed");
        let deserialized = deserialize_event(&bytes).expect("deserialize should succeed");

        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_roundtrip_event_list_preserves_order() {
        let events = vec![
            Event::new(2, "Event 2", date(2023, 2, 1)),
            Event::new(1, "Event 1", date(2023, 1, 1)),
        ];

        let bytes = serialize_events(&events).expect("serialize should succeed");
        let deserialized = deserialize_events(&bytes).expect("deserialize should succeed");

        assert_eq!(events, deserialized);
        assert_eq!(deserialized[0].id, 2);
    }

    #[test]
    fn test_serialize_empty_list() {
        let events: Vec<Event> = vec![];

        let bytes = serialize_events(&events).expect("serialize should succeed");

        assert_eq!(bytes, b"[]");
        assert!(deserialize_events(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let result = deserialize_events(b"not valid json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        // An object where a list is expected.
        let result = deserialize_events(b"{\"id\":1}");
        assert!(result.is_err());

        // A list where a single event is expected.
        let result = deserialize_event(b"[1, 2, 3]");
        assert!(result.is_err());
    }

    #[test]
    fn test_cached_bytes_match_response_shape() {
        let events = vec![
            Event::new(1, "Event 1", date(2023, 1, 1)),
            Event::new(2, "Event 2", date(2023, 2, 1)),
        ];

        let bytes = serialize_events(&events).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"[{"id":1,"name":"Event 1","date":"2023-01-01"},{"id":2,"name":"Event 2","date":"2023-02-01"}]"#
        );
    }
}
