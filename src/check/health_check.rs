//! # Health Check Result Entity
//!
//! The outcome of a single health check run, modeled as an immutable value
//! type. Fields are set through value-returning `with_*` builders rather than
//! in-place mutation, so a result can be cached and shared between concurrent
//! readers without surprises.
//!
//! ## Usage
//!
//! ```rust
//! use healthcheck_core::check::{HealthCheck, Severity};
//!
//! let check = HealthCheck::new()
//!     .with_id("session-db")
//!     .with_name("Session database")
//!     .with_severity(Severity::Critical)
//!     .with_ok(true)
//!     .with_business_impact("Users cannot log in while this is failing.")
//!     .with_panic_guide("Check the session database cluster status page.")
//!     .with_technical_summary("Runs a SELECT 1 against the session database.");
//!
//! assert!(check.passed());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How seriously a failing check should be treated by operators and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    /// Complete outage or data loss territory
    Critical = 1,
    /// Serious degradation, users impacted
    Major = 2,
    /// Minor degradation or unknown impact
    Minor = 3,
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Severity::Critical),
            2 => Ok(Severity::Major),
            3 => Ok(Severity::Minor),
            other => Err(format!("severity must be 1-3, got {other}")),
        }
    }
}

impl TryFrom<i64> for Severity {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| format!("severity must be 1-3, got {value}"))
            .and_then(Severity::try_from)
    }
}

/// The result of one health check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    /// Stable unique identifier matching the owning handler
    pub id: String,

    /// Human-readable label
    pub name: String,

    /// Alerting tier (1 critical - 3 minor)
    pub severity: Severity,

    /// Whether the check passed
    pub ok: bool,

    /// What this failing means for the business
    pub business_impact: String,

    /// What an operator should do about it
    pub panic_guide: String,

    /// What the check actually does
    pub technical_summary: String,

    /// When this result was produced
    pub last_updated: DateTime<Utc>,

    /// Error detail, set only when the handler itself failed to run.
    /// Distinct from `ok == false`, which means the check ran and reported
    /// a problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_output: Option<String>,
}

impl HealthCheck {
    /// Create an empty result stamped with the current time. Callers are
    /// expected to chain `with_*` builders to populate it.
    pub fn new() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            severity: Severity::Minor,
            ok: false,
            business_impact: String::new(),
            panic_guide: String::new(),
            technical_summary: String::new(),
            last_updated: Utc::now(),
            check_output: None,
        }
    }

    /// Whether the check passed. Only passing results are eligible for
    /// caching.
    pub fn passed(&self) -> bool {
        self.ok
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_ok(mut self, ok: bool) -> Self {
        self.ok = ok;
        self
    }

    pub fn with_business_impact(mut self, business_impact: impl Into<String>) -> Self {
        self.business_impact = business_impact.into();
        self
    }

    pub fn with_panic_guide(mut self, panic_guide: impl Into<String>) -> Self {
        self.panic_guide = panic_guide.into();
        self
    }

    pub fn with_technical_summary(mut self, technical_summary: impl Into<String>) -> Self {
        self.technical_summary = technical_summary.into();
        self
    }

    pub fn with_last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = last_updated;
        self
    }

    pub fn with_check_output(mut self, check_output: impl Into<String>) -> Self {
        self.check_output = Some(check_output.into());
        self
    }
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain_populates_all_fields() {
        let check = HealthCheck::new()
            .with_id("cdn")
            .with_name("CDN reachability")
            .with_severity(Severity::Major)
            .with_ok(true)
            .with_business_impact("Static assets degrade to origin serving.")
            .with_panic_guide("Check the CDN provider status page.")
            .with_technical_summary("HEAD request against the CDN edge.");

        assert_eq!(check.id, "cdn");
        assert_eq!(check.name, "CDN reachability");
        assert_eq!(check.severity, Severity::Major);
        assert!(check.passed());
        assert!(check.check_output.is_none());
    }

    #[test]
    fn test_with_builders_do_not_mutate_original() {
        let original = HealthCheck::new().with_id("a").with_ok(true);
        let renamed = original.clone().with_name("Renamed");

        assert_eq!(original.name, "");
        assert_eq!(renamed.name, "Renamed");
        assert_eq!(renamed.id, "a");
    }

    #[test]
    fn test_severity_conversions() {
        assert_eq!(Severity::try_from(1u8), Ok(Severity::Critical));
        assert_eq!(Severity::try_from(3u8), Ok(Severity::Minor));
        assert!(Severity::try_from(0u8).is_err());
        assert!(Severity::try_from(4u8).is_err());
        assert!(Severity::try_from(-1i64).is_err());
        assert_eq!(u8::from(Severity::Major), 2);
    }

    #[test]
    fn test_serializes_to_standard_field_names() {
        let check = HealthCheck::new().with_id("db").with_ok(true);
        let value = serde_json::to_value(&check).unwrap();

        assert_eq!(value["id"], "db");
        assert_eq!(value["ok"], true);
        assert_eq!(value["severity"], 3);
        assert!(value.get("businessImpact").is_some());
        assert!(value.get("panicGuide").is_some());
        assert!(value.get("technicalSummary").is_some());
        assert!(value.get("lastUpdated").is_some());
        // checkOutput is only present when the handler itself failed
        assert!(value.get("checkOutput").is_none());
    }

    #[test]
    fn test_round_trips_through_serde() {
        let check = HealthCheck::new()
            .with_id("queue")
            .with_severity(Severity::Critical)
            .with_ok(false)
            .with_check_output("worker pool exhausted");

        let json = serde_json::to_string(&check).unwrap();
        let restored: HealthCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, check);
    }
}
