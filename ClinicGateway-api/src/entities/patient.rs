use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clinic_gateway_data::models::Patient as StoredPatient;

/// A patient as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    /// Unique identifier for the patient
    #[schema(example = 1)]
    pub patient_id: i64,

    #[schema(example = "Ada")]
    pub first_name: Option<String>,

    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,

    /// ISO 8601 calendar date, `null` when unknown
    #[schema(value_type = Option<String>, format = Date, example = "1815-12-10")]
    pub date_of_birth: Option<NaiveDate>,
}

impl From<StoredPatient> for Patient {
    fn from(row: StoredPatient) -> Self {
        Self {
            patient_id: row.patient_id,
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
        }
    }
}
