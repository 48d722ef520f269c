//! # Health Check Handler Contract
//!
//! The capability trait every health check implements. Handlers are created
//! once during startup wiring, live for the process lifetime, and are shared
//! behind `Arc<dyn HealthCheckHandler>` between the registry, the caching
//! layer and the executor.

use async_trait::async_trait;

use crate::check::HealthCheck;
use crate::error::Result;

/// Defines a standard contract for health check handlers
#[async_trait]
pub trait HealthCheckHandler: Send + Sync {
    /// Execute the health check. Implementations are expected to handle their
    /// own internal failures and report them through the returned
    /// [`HealthCheck`]; an `Err` here means the check itself could not run
    /// and is converted into a placeholder result at the executor boundary.
    async fn run_health_check(&self) -> Result<HealthCheck>;

    /// Unique identifier for the health check. Must be non-empty and stable
    /// across restarts for a given logical check.
    fn health_check_id(&self) -> String;

    /// How often the health check should run, in seconds. `None` means the
    /// result is never cached and the check runs live on every request.
    fn health_check_interval(&self) -> Option<u64>;

    /// Concrete type name of the handler, used in duplicate-registration
    /// errors and placeholder narratives.
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
