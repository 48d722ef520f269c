#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Health Check Core
//!
//! Rust core for aggregating the results of many independently-defined
//! health checks into a single standardized report, avoiding redundant
//! check execution through interval-based caching.
//!
//! ## Overview
//!
//! Applications register one handler per health check. A request for the
//! health report runs every registered handler through a cache-aside layer
//! (checks that declare an interval reuse their last passing result until it
//! expires) and collects one result per handler, in registration order,
//! no matter what happens inside the individual checks.
//!
//! ## Architecture
//!
//! - [`registry`] holds the ordered, uniquely-keyed set of handlers; the
//!   order is resolved once at startup by the [`wiring`] pass.
//! - [`cache`] implements cache-aside reads with deferred, batched writes
//!   against a pluggable store.
//! - [`executor`] is the failure containment boundary: a check that fails to
//!   run is reported as a degraded placeholder, never as a missing entry.
//! - [`check`] defines the handler contract, the result entity, and the
//!   configuration-driven decorator.
//! - [`report`] assembles executor output into the standard report payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use healthcheck_core::cache::{CachedHealthCheckService, InMemoryCacheStore};
//! use healthcheck_core::config::HealthCheckConfig;
//! use healthcheck_core::executor::HealthCheckExecutorService;
//! use healthcheck_core::report::HealthReportFactory;
//! use healthcheck_core::test_support::StubHealthCheckHandler;
//! use healthcheck_core::wiring::{build_registry, TaggedHealthCheck};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = build_registry(vec![TaggedHealthCheck::new(
//!     Arc::new(StubHealthCheckHandler::passing("session-db", Some(60))),
//!     0,
//!     "session-db",
//! )])?;
//!
//! let cached = Arc::new(CachedHealthCheckService::with_cache_store(
//!     HealthCheckConfig::default(),
//!     Arc::new(InMemoryCacheStore::new()),
//! ));
//! let executor = HealthCheckExecutorService::new(cached);
//!
//! let results = executor.run_all(registry.get_all()).await;
//! let report = HealthReportFactory::new("demo-app", "Demo App", "Demonstration application")
//!     .build_report(results);
//!
//! assert_eq!(report.checks.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod check;
pub mod config;
pub mod error;
pub mod executor;
pub mod factory;
pub mod logging;
pub mod registry;
pub mod report;
pub mod test_support;
pub mod wiring;

pub use cache::{CacheStore, CachedHealthCheckService, InMemoryCacheStore};
pub use check::{
    ConfigSource, ConfigurableHealthCheckHandler, HealthCheck, HealthCheckHandler, Severity,
};
pub use config::HealthCheckConfig;
pub use error::{HealthCheckError, Result};
pub use executor::HealthCheckExecutorService;
pub use registry::HealthCheckRegistry;
pub use report::{HealthReport, HealthReportFactory};
