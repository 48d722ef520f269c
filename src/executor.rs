//! # Health Check Executor
//!
//! Orchestration boundary for running health checks. This is the only place
//! where an unexpected failure inside a handler is converted into a
//! well-formed degraded result instead of propagating: whatever happens
//! inside a check, the caller always gets one result per handler.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::warn;

use crate::cache::CachedHealthCheckService;
use crate::check::{HealthCheck, HealthCheckHandler};
use crate::factory;

/// Runs health check handlers through the caching layer, containing failures
pub struct HealthCheckExecutorService {
    cached_health_check_service: Arc<CachedHealthCheckService>,
}

impl HealthCheckExecutorService {
    pub fn new(cached_health_check_service: Arc<CachedHealthCheckService>) -> Self {
        Self {
            cached_health_check_service,
        }
    }

    /// Execute a single health check handler and return its result.
    ///
    /// Any failure raised out of the handler's run, including a panic deep
    /// inside the check's own logic, is converted into a placeholder result
    /// with `ok == false`. Placeholders are never cached, since only passing
    /// results are stored.
    pub async fn run(&self, handler: &dyn HealthCheckHandler) -> HealthCheck {
        let outcome = AssertUnwindSafe(
            self.cached_health_check_service
                .run_health_check_handle(handler),
        )
        .catch_unwind()
        .await;

        match outcome {
            Ok(Ok(check)) => check,
            Ok(Err(error)) => {
                warn!(
                    health_check_id = %handler.health_check_id(),
                    handler = handler.type_label(),
                    error = %error,
                    "Health check failed to execute, reporting placeholder"
                );
                factory::build_health_check_from_failing_handle(handler, &error)
            }
            Err(panic) => {
                let detail = panic_detail(panic.as_ref());
                warn!(
                    health_check_id = %handler.health_check_id(),
                    handler = handler.type_label(),
                    detail = %detail,
                    "Health check panicked, reporting placeholder"
                );
                factory::build_health_check_from_failing_handle(handler, detail)
            }
        }
    }

    /// Run all the given health check handlers and return their results in
    /// the order the handlers were given, then commit the cache batch
    /// exactly once.
    ///
    /// A commit failure is logged and swallowed: a caching failure must
    /// never turn a successful batch of health checks into a reported
    /// outage.
    pub async fn run_all(&self, handlers: &[Arc<dyn HealthCheckHandler>]) -> Vec<HealthCheck> {
        let mut results = Vec::with_capacity(handlers.len());
        for handler in handlers {
            results.push(self.run(handler.as_ref()).await);
        }

        if let Err(error) = self.cached_health_check_service.commit().await {
            warn!(error = %error, "Health check cache commit failed, discarding batch");
        }

        results
    }
}

fn panic_detail(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "health check panicked".to_string()
    }
}
