//! Static event source implementation.

use async_trait::async_trait;

use eventdesk_core::events::Event;
use eventdesk_core::storage::{EventRepository, RepositoryError, Result};

/// Event source backed by a fixed in-process array.
///
/// Reads return clones of the seeded listing. Writes are acknowledged
/// but never mutate the listing: there is no persistence layer, and the
/// next read reproduces the seeded data. Update and delete still verify
/// that the target id exists so callers get a 404 for unknown events.
#[derive(Debug, Clone)]
pub struct StaticEventSource {
    events: Vec<Event>,
}

impl StaticEventSource {
    /// Creates a source serving the given listing.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    fn contains(&self, id: i64) -> bool {
        self.events.iter().any(|e| e.id == id)
    }
}

#[async_trait]
impl EventRepository for StaticEventSource {
    async fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    async fn get_event(&self, id: i64) -> Result<Option<Event>> {
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }

    async fn create_events(&self, events: &[Event]) -> Result<()> {
        // Acknowledged no-op: the caller echoes the payload back and the
        // listing itself stays untouched.
        tracing::debug!(count = events.len(), "Acknowledged event create (no-op)");
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        if !self.contains(event.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        tracing::debug!(event_id = event.id, "Acknowledged event update (no-op)");
        Ok(())
    }

    async fn delete_event(&self, id: i64) -> Result<()> {
        if !self.contains(id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        tracing::debug!(event_id = id, "Acknowledged event delete (no-op)");
        Ok(())
    }
}
