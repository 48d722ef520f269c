//! # Cache Store Capability
//!
//! Pluggable backing store contract for cached health check results, shaped
//! after deferred-save cache pools: items are staged with `save_deferred`
//! and only hit the backend on `commit`. Absence of a configured store is a
//! valid runtime state (caching disabled process-wide).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use crate::check::HealthCheck;
use crate::error::Result;

/// Backing store for cached health check results
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch the cached result for a key. `Ok(None)` is a miss.
    async fn get_item(&self, key: &str) -> Result<Option<HealthCheck>>;

    /// Remove a batch of keys
    async fn delete_items(&self, keys: &[String]) -> Result<()>;

    /// Stage a result for storage with the given time-to-live. Staged items
    /// are not visible to readers until [`CacheStore::commit`] runs.
    async fn save_deferred(&self, key: &str, check: HealthCheck, ttl: Duration) -> Result<()>;

    /// Flush all staged items to the backend
    async fn commit(&self) -> Result<()>;
}

struct StoredItem {
    check: HealthCheck,
    expires_at: Instant,
}

/// In-process cache store backed by a map, with TTL-aware reads.
///
/// Suitable for single-process deployments and tests; multi-instance
/// deployments plug in a shared backend through the [`CacheStore`] trait
/// instead.
#[derive(Default)]
pub struct InMemoryCacheStore {
    items: RwLock<HashMap<String, StoredItem>>,
    deferred: Mutex<Vec<(String, HealthCheck, Duration)>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get_item(&self, key: &str) -> Result<Option<HealthCheck>> {
        let items = self.items.read();
        Ok(items
            .get(key)
            .filter(|item| item.expires_at > Instant::now())
            .map(|item| item.check.clone()))
    }

    async fn delete_items(&self, keys: &[String]) -> Result<()> {
        let mut items = self.items.write();
        for key in keys {
            items.remove(key);
        }
        Ok(())
    }

    async fn save_deferred(&self, key: &str, check: HealthCheck, ttl: Duration) -> Result<()> {
        self.deferred.lock().push((key.to_string(), check, ttl));
        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        let staged: Vec<_> = std::mem::take(&mut *self.deferred.lock());
        if staged.is_empty() {
            return Ok(());
        }

        let mut items = self.items.write();
        for (key, check, ttl) in staged {
            items.insert(
                key,
                StoredItem {
                    check,
                    expires_at: Instant::now() + ttl,
                },
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deferred_items_invisible_until_commit() {
        let store = InMemoryCacheStore::new();
        let check = HealthCheck::new().with_id("db").with_ok(true);

        store
            .save_deferred("health_check.db", check.clone(), Duration::from_secs(60))
            .await
            .unwrap();
        assert!(store.get_item("health_check.db").await.unwrap().is_none());

        store.commit().await.unwrap();
        let cached = store.get_item("health_check.db").await.unwrap().unwrap();
        assert_eq!(cached.id, "db");
    }

    #[tokio::test]
    async fn test_delete_items_removes_batch() {
        let store = InMemoryCacheStore::new();
        for key in ["a", "b"] {
            store
                .save_deferred(key, HealthCheck::new().with_id(key), Duration::from_secs(60))
                .await
                .unwrap();
        }
        store.commit().await.unwrap();

        store
            .delete_items(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        assert!(store.get_item("a").await.unwrap().is_none());
        assert!(store.get_item("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_items_read_as_misses() {
        let store = InMemoryCacheStore::new();
        store
            .save_deferred("gone", HealthCheck::new().with_id("gone"), Duration::ZERO)
            .await
            .unwrap();
        store.commit().await.unwrap();

        assert!(store.get_item("gone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_commit_with_nothing_staged_is_a_noop() {
        let store = InMemoryCacheStore::new();
        store.commit().await.unwrap();
    }
}
