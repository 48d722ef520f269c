//! # Registration Wiring
//!
//! Priority resolution performed once at startup, before handlers are
//! registered. The registry itself stores whatever order it is given; this
//! pass is the single place ordering is computed, keeping ordering logic and
//! storage decoupled.
//!
//! Higher numeric priority runs first. Ties are broken by ascending
//! tie-break key (typically the handler's registration identifier) so the
//! resolved order is deterministic across processes.

use std::sync::Arc;

use crate::check::HealthCheckHandler;
use crate::error::Result;
use crate::registry::HealthCheckRegistry;

/// A handler tagged with its registration priority
pub struct TaggedHealthCheck {
    pub handler: Arc<dyn HealthCheckHandler>,
    pub priority: i32,
    /// Deterministic tie-break between handlers of equal priority
    pub tie_break: String,
}

impl TaggedHealthCheck {
    pub fn new(
        handler: Arc<dyn HealthCheckHandler>,
        priority: i32,
        tie_break: impl Into<String>,
    ) -> Self {
        Self {
            handler,
            priority,
            tie_break: tie_break.into(),
        }
    }
}

/// Resolve the run order for a set of tagged handlers: highest priority
/// first, ties by ascending tie-break key.
pub fn resolve_registration_order(
    mut entries: Vec<TaggedHealthCheck>,
) -> Vec<Arc<dyn HealthCheckHandler>> {
    entries.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.tie_break.cmp(&b.tie_break))
    });
    entries.into_iter().map(|entry| entry.handler).collect()
}

/// Resolve the run order and register every handler, producing a populated
/// registry in one pass. Fails on the first duplicate id.
pub fn build_registry(entries: Vec<TaggedHealthCheck>) -> Result<HealthCheckRegistry> {
    let mut registry = HealthCheckRegistry::new();
    for handler in resolve_registration_order(entries) {
        registry.register(handler)?;
    }
    Ok(registry)
}
