use crate::models::HealthState;
use crate::reporter::StatusReporter;
use actix_web::{HttpResponse, Responder, get, web};

/// # Liveness Endpoint
///
/// Returns the current health status of the process along with a timestamp
/// and the configured application version.
///
/// ## Response
///
/// - **200 OK**: Process is healthy
///   - Body: JSON object with `status` ("ok"), `timestamp` (ISO 8601) and
///     `version` ("unknown" when no version is configured)
/// - **503 Service Unavailable**: Assembling the report failed
///   - Body: JSON object with `status` ("error"), `message` and `timestamp`
///
/// Both outcomes are well-formed, parseable responses; the handler never
/// surfaces a raw error to the transport layer.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2023-10-05T12:34:56.789+00:00",
///   "version": "3.2.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is healthy", body = crate::models::HealthReport),
        (status = 503, description = "Health report could not be assembled", body = crate::models::HealthReport)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(reporter: web::Data<StatusReporter>) -> impl Responder {
    let report = reporter.report();
    match report.status {
        HealthState::Ok => HttpResponse::Ok().json(report),
        HealthState::Error => HttpResponse::ServiceUnavailable().json(report),
    }
}

/// # Route Configuration
///
/// Registers the liveness endpoint.
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Liveness probe
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MockVersionSource, VersionSource};
    use actix_web::{App, test};
    use chrono::DateTime;
    use serde_json::Value;
    use std::sync::Arc;

    // Helper to build a test app around an injected version source
    async fn create_test_app(
        source: impl VersionSource + 'static,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let reporter = StatusReporter::new(Arc::new(source));
        test::init_service(
            App::new()
                .app_data(web::Data::new(reporter))
                .configure(configure_routes),
        )
        .await
    }

    #[actix_web::test]
    async fn test_health_endpoint_healthy() {
        let mut source = MockVersionSource::new();
        source
            .expect_version()
            .returning(|| Ok(Some("3.2.0".to_string())));
        let app = create_test_app(source).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], "3.2.0");
        assert!(body.get("message").is_none(), "message must be absent");

        let timestamp = body["timestamp"]
            .as_str()
            .expect("Timestamp should be a string");
        DateTime::parse_from_rfc3339(timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_health_endpoint_degraded_returns_503_with_body() {
        let mut source = MockVersionSource::new();
        source.expect_version().returning(|| {
            Err(ConfigError::Unavailable(
                "config store unreachable".to_string(),
            ))
        });
        let app = create_test_app(source).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        // Failure is still a well-formed, parseable response
        assert_eq!(resp.status(), 503, "Status code should be 503");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "config store unreachable");
        assert!(body.get("version").is_none(), "version must be absent");
        assert!(!body["timestamp"].as_str().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_health_endpoint_requires_no_credentials_or_body() {
        let mut source = MockVersionSource::new();
        source.expect_version().returning(|| Ok(None));
        let app = create_test_app(source).await;

        // Bare GET with no headers at all
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["version"], "unknown");
    }
}
