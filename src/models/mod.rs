/// # Health Report Model
///
/// Value objects for the liveness endpoint: [`health::HealthReport`] and
/// [`health::HealthState`]. A report is immutable once constructed and is
/// serialized directly as the endpoint's JSON body.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "version": "unknown"
/// }
/// ```
pub mod health;

pub use health::{HealthReport, HealthState};
