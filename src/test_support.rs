//! # Test Support
//!
//! Stub handlers and cache stores shared by the unit and integration tests.
//! The stubs act as proxies for anything that speaks the handler or store
//! contracts: a canned result, a canned failure, a panic, or a broken cache
//! backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::CacheStore;
use crate::check::{HealthCheck, HealthCheckHandler};
use crate::error::{HealthCheckError, Result};

enum StubOutcome {
    Pass(HealthCheck),
    Fail(String),
}

/// Handler stub returning a canned result (or failure) and counting runs
pub struct StubHealthCheckHandler {
    outcome: StubOutcome,
    health_check_id: String,
    interval: Option<u64>,
    run_count: AtomicUsize,
}

impl StubHealthCheckHandler {
    /// Stub returning exactly the given result
    pub fn new(
        health_check: HealthCheck,
        health_check_id: impl Into<String>,
        interval: Option<u64>,
    ) -> Self {
        Self {
            outcome: StubOutcome::Pass(health_check),
            health_check_id: health_check_id.into(),
            interval,
            run_count: AtomicUsize::new(0),
        }
    }

    /// Stub returning a fully populated passing result
    pub fn passing(health_check_id: &str, interval: Option<u64>) -> Self {
        let check = HealthCheck::new()
            .with_id(health_check_id)
            .with_name(health_check_id)
            .with_ok(true)
            .with_business_impact("No impact, this is a test check.")
            .with_panic_guide("Nothing to do, this is a test check.")
            .with_technical_summary("Returns a canned passing result.");
        Self::new(check, health_check_id, interval)
    }

    /// Stub whose run fails with the given message
    pub fn failing(health_check_id: &str, message: &str) -> Self {
        Self {
            outcome: StubOutcome::Fail(message.to_string()),
            health_check_id: health_check_id.to_string(),
            interval: None,
            run_count: AtomicUsize::new(0),
        }
    }

    /// How many times the stub has been run
    pub fn run_count(&self) -> usize {
        self.run_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthCheckHandler for StubHealthCheckHandler {
    async fn run_health_check(&self) -> Result<HealthCheck> {
        self.run_count.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Pass(check) => Ok(check.clone()),
            StubOutcome::Fail(message) => Err(HealthCheckError::probe_execution(
                &self.health_check_id,
                message,
            )),
        }
    }

    fn health_check_id(&self) -> String {
        self.health_check_id.clone()
    }

    fn health_check_interval(&self) -> Option<u64> {
        self.interval
    }
}

/// Handler stub whose run panics
pub struct PanickingHealthCheckHandler {
    health_check_id: String,
}

impl PanickingHealthCheckHandler {
    pub fn new(health_check_id: impl Into<String>) -> Self {
        Self {
            health_check_id: health_check_id.into(),
        }
    }
}

#[async_trait]
impl HealthCheckHandler for PanickingHealthCheckHandler {
    async fn run_health_check(&self) -> Result<HealthCheck> {
        panic!("stub handler panic");
    }

    fn health_check_id(&self) -> String {
        self.health_check_id.clone()
    }

    fn health_check_interval(&self) -> Option<u64> {
        None
    }
}

/// Cache store where every operation fails, simulating a backend outage
pub struct FailingCacheStore;

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get_item(&self, _key: &str) -> Result<Option<HealthCheck>> {
        Err(HealthCheckError::cache_operation("get_item", "backend down"))
    }

    async fn delete_items(&self, _keys: &[String]) -> Result<()> {
        Err(HealthCheckError::cache_operation(
            "delete_items",
            "backend down",
        ))
    }

    async fn save_deferred(&self, _key: &str, _check: HealthCheck, _ttl: Duration) -> Result<()> {
        Err(HealthCheckError::cache_operation(
            "save_deferred",
            "backend down",
        ))
    }

    async fn commit(&self) -> Result<()> {
        Err(HealthCheckError::cache_operation("commit", "backend down"))
    }
}

/// Cache store that reads and stages normally but fails on commit
pub struct FailingCommitStore;

#[async_trait]
impl CacheStore for FailingCommitStore {
    async fn get_item(&self, _key: &str) -> Result<Option<HealthCheck>> {
        Ok(None)
    }

    async fn delete_items(&self, _keys: &[String]) -> Result<()> {
        Ok(())
    }

    async fn save_deferred(&self, _key: &str, _check: HealthCheck, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        Err(HealthCheckError::cache_operation("commit", "backend down"))
    }
}
