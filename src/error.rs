//! # Health Check Error Types
//!
//! Structured error handling for the health check core using thiserror
//! for typed errors instead of `Box<dyn Error>` patterns.
//!
//! The error taxonomy mirrors the containment boundaries of the system:
//! duplicate identifiers surface at startup wiring time, probe execution
//! failures are absorbed by the executor, and cache failures are absorbed
//! by the caching layer.

use thiserror::Error;

/// Errors raised by the health check core
#[derive(Error, Debug)]
pub enum HealthCheckError {
    /// Two handlers claimed the same health check id during registration.
    /// Fatal at wiring time: a duplicate id would corrupt cache keys and
    /// make report correlation ambiguous.
    #[error("Registered health checks must have a unique id. Id '{id}' given by instance of {incoming} already in use by instance of {existing}")]
    DuplicateIdentifier {
        id: String,
        existing: String,
        incoming: String,
    },

    /// A handler's run failed outright (as opposed to running and reporting
    /// a non-ok status)
    #[error("Health check '{id}' failed to execute: {message}")]
    ProbeExecution { id: String, message: String },

    /// A cache store interaction failed
    #[error("Cache operation failed: {operation}: {message}")]
    CacheOperation { operation: String, message: String },

    /// Invalid configuration or environment values
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HealthCheckError {
    /// Create a duplicate identifier error
    pub fn duplicate_identifier(
        id: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::DuplicateIdentifier {
            id: id.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    /// Create a probe execution error
    pub fn probe_execution(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProbeExecution {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a cache operation error
    pub fn cache_operation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CacheOperation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for health check operations
pub type Result<T> = std::result::Result<T, HealthCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let dup = HealthCheckError::duplicate_identifier("db", "DbHandler", "OtherDbHandler");
        assert!(matches!(dup, HealthCheckError::DuplicateIdentifier { .. }));

        let probe = HealthCheckError::probe_execution("db", "connection refused");
        assert!(matches!(probe, HealthCheckError::ProbeExecution { .. }));

        let cache = HealthCheckError::cache_operation("get_item", "backend down");
        assert!(matches!(cache, HealthCheckError::CacheOperation { .. }));
    }

    #[test]
    fn test_error_display() {
        let dup = HealthCheckError::duplicate_identifier("db", "DbHandler", "OtherDbHandler");
        let display = format!("{dup}");
        assert!(display.contains("'db'"));
        assert!(display.contains("DbHandler"));
        assert!(display.contains("OtherDbHandler"));

        let cache = HealthCheckError::cache_operation("delete_items", "timed out");
        let display = format!("{cache}");
        assert!(display.contains("delete_items"));
        assert!(display.contains("timed out"));
    }
}
