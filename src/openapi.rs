use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
///
/// # Endpoints
/// - Liveness Check: `GET /health`
///
/// # Schemas
/// - `HealthReport`: Process status payload
/// - `HealthState`: Status discriminant ("ok" / "error")
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::health),
    components(
        schemas(
            crate::models::health::HealthReport,
            crate::models::health::HealthState
        )
    ),
    tags(
        (name = "Health Check", description = "Process liveness monitoring endpoints")
    ),
    info(
        description = "Liveness reporting surface of the helpdesk platform",
        title = "Helpdesk Status API",
        version = "0.3.0+sprint2",
    )
)]
pub struct ApiDoc;
