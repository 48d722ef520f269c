//! # Configurable Health Check Handler
//!
//! Decorator that lets externally supplied configuration override what a
//! health check reports, without touching the wrapped implementation.
//! Configuration keys are namespaced by the wrapper's service id, e.g.
//! `session_db_check.name` or `session_db_check.interval`.
//!
//! Decoration is concerned with value substitution only: a failure from the
//! wrapped handler's run propagates untouched, because the executor is the
//! designated boundary for failure containment.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::check::{HealthCheck, HealthCheckHandler, Severity};
use crate::error::Result;

/// Key/value configuration lookup consumed by the decorator.
///
/// Keys are `"<service_id>.<field>"` strings. The backing source is
/// deployment-specific (parameter store, env layer, static map); the
/// decorator only needs existence checks and reads.
pub trait ConfigSource: Send + Sync {
    fn has_parameter(&self, key: &str) -> bool;
    fn get_parameter(&self, key: &str) -> Option<Value>;
}

impl ConfigSource for HashMap<String, Value> {
    fn has_parameter(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get_parameter(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// Wraps a health check handler and overrides its reported identity,
/// severity, narrative fields and cache interval from configuration.
pub struct ConfigurableHealthCheckHandler {
    handler: Arc<dyn HealthCheckHandler>,
    config: Arc<dyn ConfigSource>,
    service_id: String,
}

impl ConfigurableHealthCheckHandler {
    pub fn new(
        handler: Arc<dyn HealthCheckHandler>,
        config: Arc<dyn ConfigSource>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            handler,
            config,
            service_id: service_id.into(),
        }
    }

    fn parameter(&self, name: &str) -> Option<Value> {
        let key = format!("{}.{}", self.service_id, name);
        if self.config.has_parameter(&key) {
            self.config.get_parameter(&key)
        } else {
            None
        }
    }

    fn string_parameter(&self, name: &str) -> Option<String> {
        match self.parameter(name) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        }
    }
}

#[async_trait]
impl HealthCheckHandler for ConfigurableHealthCheckHandler {
    /// Runs the wrapped handler, then overwrites each overridable field that
    /// has a matching configuration entry. The overrides are independent of
    /// one another; values of the wrong type are ignored and the handler's
    /// own value stands.
    async fn run_health_check(&self) -> Result<HealthCheck> {
        let mut check = self.handler.run_health_check().await?;

        if let Some(name) = self.string_parameter("name") {
            check = check.with_name(name);
        }
        if let Some(value) = self.parameter("severity") {
            if let Some(severity) = value.as_i64().and_then(|n| Severity::try_from(n).ok()) {
                check = check.with_severity(severity);
            }
        }
        if let Some(business_impact) = self.string_parameter("business_impact") {
            check = check.with_business_impact(business_impact);
        }
        if let Some(panic_guide) = self.string_parameter("panic_guide") {
            check = check.with_panic_guide(panic_guide);
        }
        if let Some(technical_summary) = self.string_parameter("technical_summary") {
            check = check.with_technical_summary(technical_summary);
        }

        Ok(check)
    }

    fn health_check_id(&self) -> String {
        self.string_parameter("id")
            .unwrap_or_else(|| self.handler.health_check_id())
    }

    /// An explicit null in configuration disables caching for the wrapped
    /// check; a non-integer value falls through to the handler's own
    /// interval.
    fn health_check_interval(&self) -> Option<u64> {
        match self.parameter("interval") {
            Some(Value::Null) => None,
            Some(value) => match value.as_u64() {
                Some(interval) => Some(interval),
                None => self.handler.health_check_interval(),
            },
            None => self.handler.health_check_interval(),
        }
    }
}
