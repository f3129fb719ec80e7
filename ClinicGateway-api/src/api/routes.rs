use std::sync::Arc;

use axum::{extract::FromRef, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use clinic_gateway_data::repository::{PatientRepositoryTrait, ProviderRepositoryTrait};

use crate::api::handlers::{patients, providers, root, PatientStore, ProviderStore};
use crate::openapi;

/// Shared handles passed to every handler
///
/// Built once at startup. Handlers extract only the store they need
/// through `FromRef`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub patients: PatientStore,
    pub providers: ProviderStore,
}

impl AppState {
    pub fn new(patients: PatientStore, providers: ProviderStore) -> Self {
        Self { patients, providers }
    }

    /// Use one storage value for both tables
    pub fn from_storage<S>(storage: S) -> Self
    where
        S: PatientRepositoryTrait + ProviderRepositoryTrait + 'static,
    {
        let storage = Arc::new(storage);
        Self {
            patients: storage.clone(),
            providers: storage,
        }
    }
}

/// CORS policy: any origin, method and header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let query_routes: Router<AppState> = Router::new()
        .route("/", get(root::liveness))
        .route("/patients", get(patients::get_patients))
        .route("/patients/search", get(patients::search_patients))
        .route("/providers", get(providers::get_providers))
        .route("/providers/search", get(providers::search_providers));

    debug!("Query routes configured");

    let app = Router::new()
        .merge(query_routes)
        .merge(openapi::openapi_routes::<AppState>())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state);

    debug!("Middleware applied");

    app
}
