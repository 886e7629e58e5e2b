use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overall health state carried in the `status` field of a report.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
    Error,
}

/// # Health Report
///
/// Represents the operational status of the service at a point in time.
/// Used as the response format for the liveness endpoint.
///
/// ## Fields
/// - `status`: `"ok"` when the process can serve requests, `"error"` when
///   assembling the report itself failed
/// - `timestamp`: ISO 8601 timestamp taken when the report was constructed
/// - `version`: configured application version, or `"unknown"` when no
///   version is configured; present only on `"ok"` reports
/// - `message`: human-readable failure description; present only on
///   `"error"` reports, never a stack trace
///
/// A report is constructed fresh for every probe and never mutated after
/// construction.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "version": "3.2.0"
/// }
/// ```
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthReport {
    pub status: HealthState,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthReport {
    /// Builds a healthy report carrying the resolved version string.
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            status: HealthState::Ok,
            timestamp: Utc::now().to_rfc3339(),
            version: Some(version.into()),
            message: None,
        }
    }

    /// Builds a failure report carrying the failure's message text.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            status: HealthState::Error,
            timestamp: Utc::now().to_rfc3339(),
            version: None,
            message: Some(message.into()),
        }
    }
}
