use async_trait::async_trait;

use crate::events::Event;

use super::Result;

/// Repository for event operations.
///
/// The data source owns event ids. Write operations exist so decorators
/// (such as a caching layer) can observe them; the static source treats
/// them as acknowledged no-ops.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets the full ordered event list.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Gets an event by its ID.
    async fn get_event(&self, id: i64) -> Result<Option<Event>>;

    /// Records a batch of new events.
    async fn create_events(&self, events: &[Event]) -> Result<()>;

    /// Records an update to an existing event.
    async fn update_event(&self, event: &Event) -> Result<()>;

    /// Records the deletion of an event by its ID.
    async fn delete_event(&self, id: i64) -> Result<()>;
}
