use std::sync::Arc;

use axum::extract::{Json, State};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::IntoParams;

use clinic_gateway_data::repository::ProviderRepositoryTrait;

use crate::api::error::ApiError;
use crate::api::extract::SearchQuery;
use crate::entities::common::{ErrorBody, MessageBody};
use crate::entities::provider::Provider;

/// Repository handle injected into the provider handlers
pub type ProviderStore = Arc<dyn ProviderRepositoryTrait>;

pub const SPECIALTY_REQUIRED: &str = "Provider specialty is required";

/// Query parameters for searching providers
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProviderSearchParams {
    /// Specialty to match exactly
    pub provider_specialty: Option<String>,
}

/// Get every provider
#[utoipa::path(
    get,
    path = "/providers",
    responses(
        (status = 200, description = "All providers, possibly none", body = [Provider]),
        (status = 500, description = "Database query failed", body = ErrorBody),
    ),
    tag = "providers"
)]
#[instrument(skip(store))]
pub async fn get_providers(State(store): State<ProviderStore>) -> Result<Json<Vec<Provider>>, ApiError> {
    let rows = store
        .list_providers()
        .await
        .map_err(|e| ApiError::database("fetching providers", e))?;

    info!("Returning {} providers", rows.len());
    Ok(Json(rows.into_iter().map(Provider::from).collect()))
}

/// Find providers by exact specialty
#[utoipa::path(
    get,
    path = "/providers/search",
    params(ProviderSearchParams),
    responses(
        (status = 200, description = "Matching providers", body = [Provider]),
        (status = 400, description = "provider_specialty missing or query string malformed", body = ErrorBody),
        (status = 404, description = "No provider has that specialty", body = MessageBody),
        (status = 500, description = "Database query failed", body = ErrorBody),
    ),
    tag = "providers"
)]
#[instrument(skip(store, params))]
pub async fn search_providers(
    State(store): State<ProviderStore>,
    SearchQuery(params): SearchQuery<ProviderSearchParams>,
) -> Result<Json<Vec<Provider>>, ApiError> {
    let specialty = params
        .provider_specialty
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingParameter(SPECIALTY_REQUIRED))?;

    let rows = store
        .find_providers_by_specialty(&specialty)
        .await
        .map_err(|e| ApiError::database("fetching providers", e))?;

    if rows.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No providers found with the specialty: {}",
            specialty
        )));
    }

    info!("Found {} providers", rows.len());
    Ok(Json(rows.into_iter().map(Provider::from).collect()))
}
