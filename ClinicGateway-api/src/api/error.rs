use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, info, warn};

use clinic_gateway_data::repository::RepositoryError;

use crate::entities::common::{ErrorBody, MessageBody};

/// Body sent for every failed query; the cause stays in the server log
pub const DATABASE_FAILURE_MESSAGE: &str = "Database query failed";

/// Errors a handler can finish with
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was absent or empty
    #[error("{0}")]
    MissingParameter(&'static str),

    /// The query string could not be decoded
    #[error("{0}")]
    InvalidQuery(String),

    /// A search matched no rows
    #[error("{0}")]
    NotFound(String),

    /// The query could not be executed
    #[error("Error {context}: {source}")]
    Database {
        context: &'static str,
        source: RepositoryError,
    },
}

impl ApiError {
    pub fn database(context: &'static str, source: RepositoryError) -> Self {
        ApiError::Database { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            ApiError::MissingParameter(message) => {
                warn!("Rejected search: {}", message);
                (status, Json(ErrorBody::new(message))).into_response()
            }
            ApiError::InvalidQuery(message) => {
                warn!("Rejected query string: {}", message);
                (status, Json(ErrorBody::new(message))).into_response()
            }
            ApiError::NotFound(message) => {
                info!("Search matched no rows");
                (status, Json(MessageBody { message })).into_response()
            }
            err @ ApiError::Database { .. } => {
                error!("{}", err);
                (status, Json(ErrorBody::new(DATABASE_FAILURE_MESSAGE))).into_response()
            }
        }
    }
}
