//! # Cached Health Check Execution
//!
//! Cache-aside layer that avoids redundant health check runs while bounding
//! staleness.
//!
//! ## Overview
//!
//! Each check that declares an interval is read through the configured
//! [`CacheStore`]: a fresh cached result is returned as-is, a miss or an
//! expired entry triggers a live run. Cache writes are not applied inline;
//! the layer keeps a purge queue and a deferred-save queue and applies both
//! in one batch when [`CachedHealthCheckService::commit`] runs at the end of
//! an executor pass.
//!
//! Only passing results with a positive interval are stored. Caching a
//! failing result would mask an ongoing outage behind a stale green reading,
//! so failures always re-run until they recover.
//!
//! A broken cache backend must never prevent health reporting: every store
//! failure on the read path degrades to running the check live without
//! caching.

pub mod store;

pub use store::{CacheStore, InMemoryCacheStore};

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::check::{HealthCheck, HealthCheckHandler};
use crate::config::HealthCheckConfig;
use crate::error::Result;

struct DeferredSave {
    key: String,
    check: HealthCheck,
    ttl: Duration,
}

/// Executes health check handlers through a cache-aside read with deferred
/// batched writes
pub struct CachedHealthCheckService {
    cache: Option<Arc<dyn CacheStore>>,
    config: HealthCheckConfig,

    /// Keys scheduled for batch deletion at the next commit
    purge_queue: Mutex<HashSet<String>>,

    /// Fresh results scheduled for storage at the next commit
    deferred_saves: Mutex<Vec<DeferredSave>>,
}

impl CachedHealthCheckService {
    /// Create a service with caching disabled; every check runs live
    pub fn new(config: HealthCheckConfig) -> Self {
        Self {
            cache: None,
            config,
            purge_queue: Mutex::new(HashSet::new()),
            deferred_saves: Mutex::new(Vec::new()),
        }
    }

    /// Create a service backed by the given cache store
    pub fn with_cache_store(config: HealthCheckConfig, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            cache: Some(cache),
            config,
            purge_queue: Mutex::new(HashSet::new()),
            deferred_saves: Mutex::new(Vec::new()),
        }
    }

    /// Execute a health check handler, reusing a cached result when the
    /// handler runs on an interval and the cached result is still fresh.
    ///
    /// A handler without an interval, or a service without a store, bypasses
    /// caching entirely. Errors from the handler's own run propagate to the
    /// caller (the executor's containment boundary); errors from the cache
    /// store degrade to a live run without caching.
    pub async fn run_health_check_handle(
        &self,
        handler: &dyn HealthCheckHandler,
    ) -> Result<HealthCheck> {
        let (Some(interval), Some(cache)) = (handler.health_check_interval(), &self.cache) else {
            return handler.run_health_check().await;
        };

        let cache_key = self.config.namespaced_key(&handler.health_check_id());

        let cached = match cache.get_item(&cache_key).await {
            Ok(cached) => cached,
            Err(error) => {
                warn!(
                    cache_key = %cache_key,
                    error = %error,
                    "Cache read failed, running health check live"
                );
                return handler.run_health_check().await;
            }
        };

        if let Some(cached) = cached {
            if !Self::is_stale(&cached, interval) {
                debug!(cache_key = %cache_key, "Health check served from cache");
                return Ok(cached);
            }
        }

        let check = handler.run_health_check().await?;

        self.purge_queue.lock().await.insert(cache_key.clone());

        if check.passed() && interval > 0 {
            let ttl = Duration::from_secs(interval.max(self.config.min_cache_ttl_secs));
            self.deferred_saves.lock().await.push(DeferredSave {
                key: cache_key,
                check: check.clone(),
                ttl,
            });
        }

        Ok(check)
    }

    /// A cached result is stale once its age reaches the handler's interval
    fn is_stale(cached: &HealthCheck, interval: u64) -> bool {
        let age_secs = Utc::now()
            .signed_duration_since(cached.last_updated)
            .num_seconds();
        age_secs >= i64::try_from(interval).unwrap_or(i64::MAX)
    }

    /// Apply the purge queue, flush the deferred saves, then commit the
    /// store, clearing both queues.
    ///
    /// A no-op with empty queues or without a configured store. The queues
    /// are drained before the store is touched, so a failed batch is
    /// discarded rather than replayed.
    pub async fn commit(&self) -> Result<()> {
        let Some(cache) = &self.cache else {
            return Ok(());
        };

        let purged: Vec<String> = self.purge_queue.lock().await.drain().collect();
        let saves: Vec<DeferredSave> = std::mem::take(&mut *self.deferred_saves.lock().await);

        if purged.is_empty() && saves.is_empty() {
            return Ok(());
        }

        cache.delete_items(&purged).await?;
        for save in saves {
            cache.save_deferred(&save.key, save.check, save.ttl).await?;
        }
        cache.commit().await?;

        debug!(purged = purged.len(), "Committed health check cache batch");
        Ok(())
    }
}
