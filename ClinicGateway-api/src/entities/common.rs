use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for validation and server errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Error message
    #[schema(example = "Database query failed")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Body returned when a search matches nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    /// Human-readable message echoing the search term
    #[schema(example = "No patients found with the first name: Ada")]
    pub message: String,
}
