//! Cached event repository decorator.
//!
//! Wraps an `EventRepository` implementation with the read-through
//! pattern: reads check the cache first and populate it on miss, writes
//! invalidate unconditionally so the next read is forced back to the
//! source. Cache failures degrade to a warning and never fail a request.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use eventdesk_core::cache::{
    deserialize_event, deserialize_events, event_key, events_key, serialize_event,
    serialize_events, Cache,
};
use eventdesk_core::events::Event;
use eventdesk_core::storage::{EventRepository, Result};

/// Cached event repository decorator.
///
/// There is no single-flight guarantee: concurrent cold reads may each
/// miss and each repopulate. The last `set` wins, which is harmless here
/// because every fetch of the static source returns identical data.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedEventRepository<R, C>
where
    R: EventRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedEventRepository<R, C>
where
    R: EventRepository,
    C: Cache,
{
    /// Creates a new cached event repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for cached values
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    async fn invalidate_listing(&self) {
        if let Err(err) = self.cache.delete(&events_key()).await {
            tracing::warn!(error = %err, "Failed to invalidate event listing cache");
        }
    }

    async fn invalidate_event(&self, id: i64) {
        if let Err(err) = self.cache.delete(&event_key(id)).await {
            tracing::warn!(event_id = id, error = %err, "Failed to invalidate event cache");
        }
    }
}

#[async_trait]
impl<R, C> EventRepository for CachedEventRepository<R, C>
where
    R: EventRepository + 'static,
    C: Cache + 'static,
{
    async fn list_events(&self) -> Result<Vec<Event>> {
        let cache_key = events_key();

        // Check cache first
        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(events) = deserialize_events(&bytes) {
                tracing::trace!("Cache hit for event listing");
                return Ok(events);
            }
            // Deserialization failed - treat as cache miss
            tracing::warn!("Cached event listing failed to deserialize");
        }

        // Cache miss - fetch from the data source
        tracing::trace!("Cache miss for event listing");
        let events = self.repository.list_events().await?;

        if let Ok(bytes) = serialize_events(&events) {
            if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                tracing::warn!(error = %err, "Failed to cache event listing");
            }
        }

        Ok(events)
    }

    async fn get_event(&self, id: i64) -> Result<Option<Event>> {
        let cache_key = event_key(id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(event) = deserialize_event(&bytes) {
                tracing::trace!(event_id = id, "Cache hit for event");
                return Ok(Some(event));
            }
            tracing::warn!(event_id = id, "Cached event failed to deserialize");
        }

        tracing::trace!(event_id = id, "Cache miss for event");
        let event = self.repository.get_event(id).await?;

        // Absence is never cached.
        if let Some(ref e) = event {
            if let Ok(bytes) = serialize_event(e) {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(event_id = id, error = %err, "Failed to cache event");
                }
            }
        }

        Ok(event)
    }

    async fn create_events(&self, events: &[Event]) -> Result<()> {
        // 1. Record at the data source
        self.repository.create_events(events).await?;

        // 2. Invalidate the listing unconditionally so the next read
        //    repopulates from source
        self.invalidate_listing().await;

        tracing::debug!(count = events.len(), "Events created, listing invalidated");
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        self.repository.update_event(event).await?;

        self.invalidate_event(event.id).await;
        self.invalidate_listing().await;

        tracing::debug!(event_id = event.id, "Event updated, caches invalidated");
        Ok(())
    }

    async fn delete_event(&self, id: i64) -> Result<()> {
        self.repository.delete_event(id).await?;

        self.invalidate_event(id).await;
        self.invalidate_listing().await;

        tracing::debug!(event_id = id, "Event deleted, caches invalidated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    use chrono::NaiveDate;

    use eventdesk_core::cache::Result as CacheResult;
    use eventdesk_core::storage::RepositoryError;

    // Mock repository that tracks calls
    struct MockEventRepository {
        events: Vec<Event>,
        list_calls: AtomicUsize,
        get_calls: AtomicUsize,
    }

    impl MockEventRepository {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events,
                list_calls: AtomicUsize::new(0),
                get_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EventRepository for MockEventRepository {
        async fn list_events(&self) -> Result<Vec<Event>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.events.clone())
        }

        async fn get_event(&self, id: i64) -> Result<Option<Event>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.events.iter().find(|e| e.id == id).cloned())
        }

        async fn create_events(&self, _events: &[Event]) -> Result<()> {
            Ok(())
        }

        async fn update_event(&self, event: &Event) -> Result<()> {
            if self.events.iter().any(|e| e.id == event.id) {
                Ok(())
            } else {
                Err(RepositoryError::NotFound {
                    entity_type: "Event",
                    id: event.id.to_string(),
                })
            }
        }

        async fn delete_event(&self, _id: i64) -> Result<()> {
            Ok(())
        }
    }

    // Mock cache
    struct MockCache {
        store: RwLock<HashMap<String, Vec<u8>>>,
    }

    impl MockCache {
        fn new() -> Self {
            Self {
                store: RwLock::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            Ok(self.store.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            self.store
                .write()
                .await
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.store.write().await.remove(key);
            Ok(())
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn test_events() -> Vec<Event> {
        vec![
            Event::new(1, "Event 1", date(2023, 1, 1)),
            Event::new(2, "Event 2", date(2023, 2, 1)),
        ]
    }

    fn cached_repo(
        events: Vec<Event>,
    ) -> (
        Arc<MockEventRepository>,
        Arc<MockCache>,
        CachedEventRepository<MockEventRepository, MockCache>,
    ) {
        let repo = Arc::new(MockEventRepository::new(events));
        let cache = Arc::new(MockCache::new());
        let cached =
            CachedEventRepository::new(repo.clone(), cache.clone(), Duration::from_secs(100));
        (repo, cache, cached)
    }

    #[tokio::test]
    async fn test_list_cache_miss_populates() {
        let (repo, cache, cached) = cached_repo(test_events());

        // First call - should hit the repository
        let events = cached.list_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 1);

        // Verify cache was populated under the fixed key
        assert!(cache.store.read().await.contains_key("events"));
    }

    #[tokio::test]
    async fn test_list_cache_hit_skips_repository() {
        let (repo, _cache, cached) = cached_repo(test_events());

        let first = cached.list_events().await.unwrap();
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 1);

        // Second call - served from cache, identical content
        let second = cached.list_events().await.unwrap();
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 1); // Still 1
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_corrupt_cached_bytes_fall_back_to_source() {
        let (repo, cache, cached) = cached_repo(test_events());

        cache.set("events", b"not json", None).await.unwrap();

        let events = cached.list_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_invalidates_listing() {
        let (repo, cache, cached) = cached_repo(test_events());

        // Warm the cache
        let _ = cached.list_events().await.unwrap();
        assert!(cache.store.read().await.contains_key("events"));

        let incoming = vec![Event::new(3, "Event 3", date(2023, 3, 1))];
        cached.create_events(&incoming).await.unwrap();

        // Listing entry gone; the next read is a guaranteed miss
        assert!(!cache.store.read().await.contains_key("events"));

        let _ = cached.list_events().await.unwrap();
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_get_event_read_through() {
        let (repo, cache, cached) = cached_repo(test_events());

        let event = cached.get_event(1).await.unwrap().unwrap();
        assert_eq!(event.name, "Event 1");
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
        assert!(cache.store.read().await.contains_key("event:1"));

        let _ = cached.get_event(1).await.unwrap();
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1); // Still 1
    }

    #[tokio::test]
    async fn test_absence_is_not_cached() {
        let (repo, cache, cached) = cached_repo(test_events());

        assert!(cached.get_event(99).await.unwrap().is_none());
        assert!(!cache.store.read().await.contains_key("event:99"));

        // A second lookup goes back to the source
        assert!(cached.get_event(99).await.unwrap().is_none());
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_update_invalidates_event_and_listing() {
        let (_repo, cache, cached) = cached_repo(test_events());

        let _ = cached.list_events().await.unwrap();
        let _ = cached.get_event(1).await.unwrap();
        assert!(cache.store.read().await.contains_key("events"));
        assert!(cache.store.read().await.contains_key("event:1"));

        let updated = Event::new(1, "Renamed", date(2023, 1, 2));
        cached.update_event(&updated).await.unwrap();

        assert!(!cache.store.read().await.contains_key("events"));
        assert!(!cache.store.read().await.contains_key("event:1"));
    }

    #[tokio::test]
    async fn test_failed_update_leaves_cache_warm() {
        let (_repo, cache, cached) = cached_repo(test_events());

        let _ = cached.list_events().await.unwrap();

        let unknown = Event::new(99, "Ghost", date(2023, 1, 2));
        let result = cached.update_event(&unknown).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));

        // Invalidation only happens after a successful write.
        assert!(cache.store.read().await.contains_key("events"));
    }

    #[tokio::test]
    async fn test_delete_invalidates_event_and_listing() {
        let (_repo, cache, cached) = cached_repo(test_events());

        let _ = cached.list_events().await.unwrap();
        let _ = cached.get_event(2).await.unwrap();

        cached.delete_event(2).await.unwrap();

        assert!(!cache.store.read().await.contains_key("events"));
        assert!(!cache.store.read().await.contains_key("event:2"));
    }
}
