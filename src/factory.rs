//! # Health Check Factory
//!
//! Builds the placeholder result reported when a handler's run itself fails.
//! Severity is minor because the real impact of an internal failure is
//! unknown; the narrative fields point operators at the failure output.

use std::fmt::Display;

use crate::check::{HealthCheck, HealthCheckHandler, Severity};

/// Build a well-formed degraded result for a handler whose run failed
pub fn build_health_check_from_failing_handle(
    handler: &dyn HealthCheckHandler,
    failure_detail: impl Display,
) -> HealthCheck {
    let health_check_id = handler.health_check_id();
    HealthCheck::new()
        .with_id(&health_check_id)
        .with_name(&health_check_id)
        .with_severity(Severity::Minor)
        .with_ok(false)
        .with_business_impact(
            "A health check failed to run. It is unknown what effects this would have for users.",
        )
        .with_panic_guide(
            "Read the output of the check to find where the fatal error was thrown. Note that \
             this health check failing might be a symptom of a larger problem and more serious \
             health check failures should be looked into first.",
        )
        .with_technical_summary(format!(
            "This is a placeholder for the {} health check that failed to run successfully.",
            handler.type_label()
        ))
        .with_check_output(failure_detail.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HealthCheckError;
    use crate::test_support::StubHealthCheckHandler;

    #[test]
    fn test_placeholder_shape() {
        let handler = StubHealthCheckHandler::passing("payments-db", Some(60));
        let error = HealthCheckError::probe_execution("payments-db", "connection refused");

        let check = build_health_check_from_failing_handle(&handler, &error);

        assert_eq!(check.id, "payments-db");
        assert_eq!(check.name, "payments-db");
        assert_eq!(check.severity, Severity::Minor);
        assert!(!check.ok);
        assert!(!check.business_impact.is_empty());
        assert!(!check.panic_guide.is_empty());
        assert!(check.technical_summary.contains("StubHealthCheckHandler"));
        assert!(check.check_output.as_ref().unwrap().contains("connection refused"));
    }
}
