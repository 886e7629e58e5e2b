use actix_web::{App, HttpServer, web::Data};
use helpdesk_status::config::EnvVersionSource;
use helpdesk_status::openapi::ApiDoc;
use helpdesk_status::reporter::StatusReporter;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Helpdesk Status Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Liveness endpoint backed by a shared [`StatusReporter`]
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Structured logging via `tracing`
///
/// # Endpoints
/// - Liveness: `GET /health` (unauthenticated)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default
/// - Reported version read from `HELPDESK_VERSION` (falls back to "unknown")
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("helpdesk_status=info")),
        )
        .init();

    let reporter = Data::new(StatusReporter::new(Arc::new(EnvVersionSource::new())));

    info!("starting helpdesk-status on 127.0.0.1:8080");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(reporter.clone())
            .app_data(Data::new(openapi.clone()))
            .configure(helpdesk_status::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
