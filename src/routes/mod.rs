use actix_web::web;

/// # Liveness Endpoint
///
/// Reports whether this process can serve requests.
///
/// ## Response
///
/// - **200 OK**: Process is healthy
///   - Body: JSON object with `status` ("ok"), `timestamp` in ISO 8601
///     format and `version`
/// - **503 Service Unavailable**: Assembling the report failed
///   - Body: JSON object with `status` ("error"), `message` and `timestamp`
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2023-10-05T12:34:56.789+00:00",
///   "version": "unknown"
/// }
/// ```
pub mod health;

/// # Route Configuration
///
/// Mounts all HTTP endpoints.
///
/// The liveness endpoint lives at the root scope, outside any versioned
/// `/api/v1` scope, so that authentication or CSRF middleware applied to
/// the API scope can never gate it: load balancers and orchestrators must
/// be able to probe it without credentials.
///
/// ## Example Endpoints
///
/// ```text
/// GET /health - Process liveness status
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
}
