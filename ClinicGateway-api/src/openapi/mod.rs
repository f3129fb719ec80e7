use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

/// Path serving the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Routes exposing the API description
pub fn openapi_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::root::liveness,
        crate::api::handlers::patients::get_patients,
        crate::api::handlers::patients::search_patients,
        crate::api::handlers::providers::get_providers,
        crate::api::handlers::providers::search_providers,
    ),
    components(
        schemas(
            crate::entities::patient::Patient,
            crate::entities::provider::Provider,
            crate::entities::common::ErrorBody,
            crate::entities::common::MessageBody,
        )
    ),
    tags(
        (name = "system", description = "Liveness"),
        (name = "patients", description = "Read-only patient queries"),
        (name = "providers", description = "Read-only provider queries")
    ),
    info(
        title = "Clinic Gateway API",
        version = "0.1.0",
        description = "Read-only queries over the patients and providers tables",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
