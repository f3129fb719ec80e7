use std::sync::Arc;

use axum::extract::{Json, State};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::IntoParams;

use clinic_gateway_data::repository::PatientRepositoryTrait;

use crate::api::error::ApiError;
use crate::api::extract::SearchQuery;
use crate::entities::common::{ErrorBody, MessageBody};
use crate::entities::patient::Patient;

/// Repository handle injected into the patient handlers
pub type PatientStore = Arc<dyn PatientRepositoryTrait>;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";

/// Query parameters for searching patients
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PatientSearchParams {
    /// First name to match exactly
    pub first_name: Option<String>,
}

/// Get every patient
#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All patients, possibly none", body = [Patient]),
        (status = 500, description = "Database query failed", body = ErrorBody),
    ),
    tag = "patients"
)]
#[instrument(skip(store))]
pub async fn get_patients(State(store): State<PatientStore>) -> Result<Json<Vec<Patient>>, ApiError> {
    let rows = store
        .list_patients()
        .await
        .map_err(|e| ApiError::database("fetching patients", e))?;

    info!("Returning {} patients", rows.len());
    Ok(Json(rows.into_iter().map(Patient::from).collect()))
}

/// Find patients by exact first name
#[utoipa::path(
    get,
    path = "/patients/search",
    params(PatientSearchParams),
    responses(
        (status = 200, description = "Matching patients", body = [Patient]),
        (status = 400, description = "first_name missing or query string malformed", body = ErrorBody),
        (status = 404, description = "No patient has that first name", body = MessageBody),
        (status = 500, description = "Database query failed", body = ErrorBody),
    ),
    tag = "patients"
)]
#[instrument(skip(store, params))]
pub async fn search_patients(
    State(store): State<PatientStore>,
    SearchQuery(params): SearchQuery<PatientSearchParams>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let first_name = params
        .first_name
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::MissingParameter(FIRST_NAME_REQUIRED))?;

    let rows = store
        .find_patients_by_first_name(&first_name)
        .await
        .map_err(|e| ApiError::database("fetching patients", e))?;

    if rows.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No patients found with the first name: {}",
            first_name
        )));
    }

    info!("Found {} patients", rows.len());
    Ok(Json(rows.into_iter().map(Patient::from).collect()))
}
