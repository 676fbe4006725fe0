mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{event_key, events_key};
pub use serialization::{
    deserialize_event, deserialize_events, serialize_event, serialize_events, SerializationError,
};
pub use traits::Cache;
