//! # Health Check Configuration
//!
//! Settings for the caching layer: the namespace prefixed onto cache keys
//! and the minimum TTL floor applied to stored results. The floor exists so
//! that very small configured intervals cannot thrash the backing store
//! with near-continuous writes.

use crate::error::{HealthCheckError, Result};

/// Default namespace prefixed onto every cache key
pub const DEFAULT_CACHE_NAMESPACE: &str = "health_check";

/// Default minimum TTL floor, in seconds
pub const DEFAULT_MIN_CACHE_TTL_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct HealthCheckConfig {
    /// Stable prefix for cache keys, keeping health check entries from
    /// colliding with other users of a shared store
    pub cache_namespace: String,

    /// Lower bound on the TTL of stored results, in seconds. The effective
    /// TTL for a check is `max(min_cache_ttl_secs, interval)`.
    pub min_cache_ttl_secs: u64,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            cache_namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
            min_cache_ttl_secs: DEFAULT_MIN_CACHE_TTL_SECS,
        }
    }
}

impl HealthCheckConfig {
    /// Build a configuration from the environment, falling back to defaults
    /// for anything unset
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(namespace) = std::env::var("HEALTH_CHECK_CACHE_NAMESPACE") {
            if namespace.is_empty() {
                return Err(HealthCheckError::configuration(
                    "HEALTH_CHECK_CACHE_NAMESPACE must not be empty",
                ));
            }
            config.cache_namespace = namespace;
        }

        if let Ok(floor) = std::env::var("HEALTH_CHECK_MIN_CACHE_TTL_SECS") {
            config.min_cache_ttl_secs = floor.parse().map_err(|e| {
                HealthCheckError::configuration(format!(
                    "Invalid HEALTH_CHECK_MIN_CACHE_TTL_SECS: {e}"
                ))
            })?;
        }

        Ok(config)
    }

    /// Cache key for a health check id under this configuration's namespace
    pub fn namespaced_key(&self, health_check_id: &str) -> String {
        format!("{}.{}", self.cache_namespace, health_check_id)
    }
}
