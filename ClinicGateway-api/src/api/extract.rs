use axum::extract::{rejection::QueryRejection, FromRequestParts, Query};

use crate::api::error::ApiError;

/// `Query` whose rejection is reported through `ApiError`, so a malformed
/// query string gets the same JSON error body as a missing parameter.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct SearchQuery<T>(pub T);

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}
