//! # Health Check Registry
//!
//! Ordered, uniquely-keyed store for the health checks used across an
//! application.
//!
//! ## Overview
//!
//! The registry is populated once during startup wiring, in the order
//! produced by the priority-resolution pass (see [`crate::wiring`]), and is
//! read-only for the remainder of the process. Registration order is
//! execution and report order. An id index gives O(1) lookup for the
//! single-check path.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use healthcheck_core::registry::HealthCheckRegistry;
//! use healthcheck_core::test_support::StubHealthCheckHandler;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = HealthCheckRegistry::new();
//! registry.register(Arc::new(StubHealthCheckHandler::passing("session-db", Some(60))))?;
//!
//! assert!(registry.get_by_id("session-db").is_some());
//! assert_eq!(registry.get_all().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::check::HealthCheckHandler;
use crate::error::{HealthCheckError, Result};

/// Registry of health check handlers in their run order
#[derive(Default)]
pub struct HealthCheckRegistry {
    /// Handlers in the order they were registered, which is the order they
    /// run and appear in the report
    registered_health_checks: Vec<Arc<dyn HealthCheckHandler>>,

    /// Maps health check ids to their position in the run order
    run_order_by_id: HashMap<String, usize>,
}

impl HealthCheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a health check handler, appending it to the run order.
    ///
    /// Fails with [`HealthCheckError::DuplicateIdentifier`] when another
    /// handler already claimed the same id, naming both owners so the
    /// misconfiguration can be found quickly. The registry is left unchanged
    /// in that case.
    pub fn register(&mut self, handler: Arc<dyn HealthCheckHandler>) -> Result<()> {
        let id = handler.health_check_id();

        if id.is_empty() {
            return Err(HealthCheckError::configuration(format!(
                "Health check id cannot be empty (handler {})",
                handler.type_label()
            )));
        }

        if let Some(&position) = self.run_order_by_id.get(&id) {
            let existing = self.registered_health_checks[position].type_label();
            return Err(HealthCheckError::duplicate_identifier(
                id,
                existing,
                handler.type_label(),
            ));
        }

        debug!(
            health_check_id = %id,
            handler = handler.type_label(),
            "Registered health check"
        );

        self.registered_health_checks.push(handler);
        self.run_order_by_id
            .insert(id, self.registered_health_checks.len() - 1);
        Ok(())
    }

    /// All registered health checks in the order they need to be run
    pub fn get_all(&self) -> &[Arc<dyn HealthCheckHandler>] {
        &self.registered_health_checks
    }

    /// Look up a health check by id. `None` is the normal "no such check"
    /// signal, left to the caller to translate (typically into a 404).
    pub fn get_by_id(&self, health_check_id: &str) -> Option<Arc<dyn HealthCheckHandler>> {
        self.run_order_by_id
            .get(health_check_id)
            .map(|&position| Arc::clone(&self.registered_health_checks[position]))
    }

    /// Number of registered health checks
    pub fn len(&self) -> usize {
        self.registered_health_checks.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.registered_health_checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubHealthCheckHandler;

    #[test]
    fn test_registration_preserves_order() {
        let mut registry = HealthCheckRegistry::new();
        for id in ["a", "b", "c"] {
            registry
                .register(Arc::new(StubHealthCheckHandler::passing(id, None)))
                .unwrap();
        }

        let ids: Vec<String> = registry
            .get_all()
            .iter()
            .map(|handler| handler.health_check_id())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_id_fails_and_leaves_registry_unchanged() {
        let mut registry = HealthCheckRegistry::new();
        registry
            .register(Arc::new(StubHealthCheckHandler::passing("x", None)))
            .unwrap();

        let error = registry
            .register(Arc::new(StubHealthCheckHandler::passing("x", Some(60))))
            .unwrap_err();

        assert!(matches!(
            error,
            HealthCheckError::DuplicateIdentifier { .. }
        ));
        assert!(format!("{error}").contains("StubHealthCheckHandler"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get_by_id("x").unwrap().health_check_interval().is_none());
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let mut registry = HealthCheckRegistry::new();
        let error = registry
            .register(Arc::new(StubHealthCheckHandler::passing("", None)))
            .unwrap_err();

        assert!(matches!(error, HealthCheckError::Configuration { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let mut registry = HealthCheckRegistry::new();
        registry
            .register(Arc::new(StubHealthCheckHandler::passing("x", None)))
            .unwrap();
        registry
            .register(Arc::new(StubHealthCheckHandler::passing("y", Some(30))))
            .unwrap();

        let found = registry.get_by_id("y").unwrap();
        assert_eq!(found.health_check_id(), "y");
        assert!(registry.get_by_id("z").is_none());
    }
}
