use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    ///
    /// Returns `None` for absent or expired entries.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL, overwriting any
    /// existing entry for the key.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key, unconditionally.
    ///
    /// Subsequent `get` calls return `None` regardless of prior TTL.
    async fn delete(&self, key: &str) -> Result<()>;
}
