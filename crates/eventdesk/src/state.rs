//! Application state with repository-based storage.
//!
//! The cache and data source are explicitly owned components wired here
//! and injected into handlers, with their lifecycle tied to the server
//! process. Handlers never touch a module-level singleton.

use std::sync::Arc;

use eventdesk_core::storage::EventRepository;

use crate::cache::memory::MemoryCache;
use crate::config::Config;
use crate::seed::seed_events;
use crate::storage::cached::CachedEventRepository;
use crate::storage::source::StaticEventSource;

/// Shared application state.
///
/// This is cloned for each request handler and contains the event
/// repository behind a trait object.
#[derive(Clone)]
pub struct AppState {
    /// Event repository (cached, wraps the static data source).
    pub event_repo: Arc<dyn EventRepository>,
}

impl AppState {
    /// Creates AppState with the static data source behind the in-memory
    /// read-through cache.
    pub fn new(config: &Config) -> Self {
        let source = Arc::new(StaticEventSource::new(seed_events()));
        let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

        let cached_repo = Arc::new(CachedEventRepository::new(
            source,
            cache,
            config.cache_ttl(),
        ));

        Self {
            event_repo: cached_repo,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
