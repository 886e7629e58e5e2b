use crate::config::{ConfigError, UNKNOWN_VERSION, VersionSource};
use crate::models::HealthReport;
use std::sync::Arc;
use tracing::warn;

/// # Status Reporter
///
/// Answers "can this process serve requests" with a structured, timestamped
/// [`HealthReport`]. This is a liveness check, not a readiness check: no
/// downstream dependencies are probed.
///
/// ## Contract
///
/// [`report`] never fails past its own boundary. Any failure raised while
/// gathering the report's fields is caught here and converted into an
/// `error`-status report carrying the failure's message text, so that
/// monitoring callers always receive a well-formed body rather than a
/// transport-level error.
///
/// The version accessor is injected at construction time so tests can
/// substitute a mock and simulate configuration failures.
///
/// [`report`]: StatusReporter::report
pub struct StatusReporter {
    version_source: Arc<dyn VersionSource>,
}

impl StatusReporter {
    pub fn new(version_source: Arc<dyn VersionSource>) -> Self {
        Self { version_source }
    }

    /// Assembles a fresh health report. Infallible by design.
    pub fn report(&self) -> HealthReport {
        match self.gather() {
            Ok(report) => report,
            Err(failure) => {
                warn!(error = %failure, "health report degraded");
                HealthReport::degraded(failure.to_string())
            }
        }
    }

    fn gather(&self) -> Result<HealthReport, ConfigError> {
        let version = self
            .version_source
            .version()?
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        Ok(HealthReport::ok(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockVersionSource;
    use crate::models::HealthState;
    use chrono::DateTime;

    fn reporter_with(source: MockVersionSource) -> StatusReporter {
        StatusReporter::new(Arc::new(source))
    }

    #[test]
    fn test_report_with_configured_version() {
        let mut source = MockVersionSource::new();
        source
            .expect_version()
            .returning(|| Ok(Some("3.2.0".to_string())));

        let report = reporter_with(source).report();

        assert_eq!(report.status, HealthState::Ok);
        assert_eq!(report.version.as_deref(), Some("3.2.0"));
        assert!(report.message.is_none());
    }

    #[test]
    fn test_report_with_absent_version_is_unknown_not_error() {
        let mut source = MockVersionSource::new();
        source.expect_version().returning(|| Ok(None));

        let report = reporter_with(source).report();

        assert_eq!(report.status, HealthState::Ok);
        assert_eq!(report.version.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_config_failure_converted_to_degraded_report() {
        let mut source = MockVersionSource::new();
        source.expect_version().returning(|| {
            Err(ConfigError::Unavailable(
                "config store unreachable".to_string(),
            ))
        });

        // Must not panic or propagate the error to the caller
        let report = reporter_with(source).report();

        assert_eq!(report.status, HealthState::Error);
        assert_eq!(report.message.as_deref(), Some("config store unreachable"));
        assert!(report.version.is_none());
        assert!(!report.timestamp.is_empty());
    }

    #[test]
    fn test_timestamps_non_decreasing_across_calls() {
        let mut source = MockVersionSource::new();
        source.expect_version().returning(|| Ok(None));
        let reporter = reporter_with(source);

        let first = reporter.report();
        let second = reporter.report();

        let t1 = DateTime::parse_from_rfc3339(&first.timestamp).unwrap();
        let t2 = DateTime::parse_from_rfc3339(&second.timestamp).unwrap();
        assert!(t2 >= t1, "timestamps must be monotonically non-decreasing");
    }

    #[test]
    fn test_repeated_reports_differ_only_in_timestamp() {
        let mut source = MockVersionSource::new();
        source
            .expect_version()
            .returning(|| Ok(Some("3.2.0".to_string())));
        let reporter = reporter_with(source);

        let first = reporter.report();
        let second = reporter.report();

        assert_eq!(first.status, second.status);
        assert_eq!(first.version, second.version);
        assert_eq!(first.message, second.message);
    }
}
