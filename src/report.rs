//! # Aggregated Health Report
//!
//! Assembles executor output into the standard health report payload:
//! a schema version, the system's identity fields, and one entry per check.
//! Checks missing required narrative data are dropped from the report and
//! logged, so a misbehaving handler cannot produce a payload that fails
//! downstream schema validation. Serialization and transport of the report
//! belong to the surrounding application.

use serde::Serialize;
use tracing::info;

use crate::check::HealthCheck;

/// Version of the report schema this payload conforms to
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// The aggregated health report payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub schema_version: u32,
    pub system_code: String,
    pub name: String,
    pub description: String,
    pub checks: Vec<HealthCheck>,
}

/// Builds health report payloads for one system
pub struct HealthReportFactory {
    system_code: String,
    name: String,
    description: String,
}

impl HealthReportFactory {
    pub fn new(
        system_code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            system_code: system_code.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build a report from executor output, dropping checks that do not
    /// carry the data required by the report standard
    pub fn build_report(&self, checks: Vec<HealthCheck>) -> HealthReport {
        let checks = checks
            .into_iter()
            .filter(|check| {
                let valid = Self::validate_check(check);
                if !valid {
                    info!(
                        health_check_id = %check.id,
                        "Dropping health check with missing required fields from report"
                    );
                }
                valid
            })
            .collect();

        HealthReport {
            schema_version: REPORT_SCHEMA_VERSION,
            system_code: self.system_code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            checks,
        }
    }

    /// Whether a check carries every field the report standard requires
    fn validate_check(check: &HealthCheck) -> bool {
        !check.id.is_empty()
            && !check.name.is_empty()
            && !check.business_impact.is_empty()
            && !check.panic_guide.is_empty()
            && !check.technical_summary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Severity;

    fn factory() -> HealthReportFactory {
        HealthReportFactory::new("demo-app", "Demo App", "Demonstration application")
    }

    fn complete_check(id: &str) -> HealthCheck {
        HealthCheck::new()
            .with_id(id)
            .with_name(id)
            .with_severity(Severity::Major)
            .with_ok(true)
            .with_business_impact("impact")
            .with_panic_guide("guide")
            .with_technical_summary("summary")
    }

    #[test]
    fn test_report_carries_base_fields_and_checks() {
        let report = factory().build_report(vec![complete_check("a"), complete_check("b")]);

        assert_eq!(report.schema_version, 1);
        assert_eq!(report.system_code, "demo-app");
        assert_eq!(report.checks.len(), 2);
        assert_eq!(report.checks[0].id, "a");
        assert_eq!(report.checks[1].id, "b");
    }

    #[test]
    fn test_incomplete_checks_are_dropped() {
        let incomplete = HealthCheck::new().with_id("half-done").with_ok(true);
        let report = factory().build_report(vec![complete_check("a"), incomplete]);

        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].id, "a");
    }

    #[test]
    fn test_report_serializes_with_standard_field_names() {
        let report = factory().build_report(vec![complete_check("a")]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["schemaVersion"], 1);
        assert_eq!(value["systemCode"], "demo-app");
        assert!(value["checks"].as_array().is_some());
        assert_eq!(value["checks"][0]["businessImpact"], "impact");
    }
}
