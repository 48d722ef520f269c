//! # Health Check Contracts
//!
//! The result entity, the handler capability trait, and the configurable
//! decorator that wraps a handler with configuration-driven overrides.

pub mod configurable;
pub mod handler;
pub mod health_check;

pub use configurable::{ConfigSource, ConfigurableHealthCheckHandler};
pub use handler::HealthCheckHandler;
pub use health_check::{HealthCheck, Severity};
