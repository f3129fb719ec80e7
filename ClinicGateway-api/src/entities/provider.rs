use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clinic_gateway_data::models::Provider as StoredProvider;

/// A provider as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Provider {
    #[schema(example = "Jane")]
    pub first_name: Option<String>,

    #[schema(example = "Doe")]
    pub last_name: Option<String>,

    #[schema(example = "Cardiology")]
    pub provider_specialty: Option<String>,
}

impl From<StoredProvider> for Provider {
    fn from(row: StoredProvider) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            provider_specialty: row.provider_specialty,
        }
    }
}
