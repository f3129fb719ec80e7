use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

/// Storage model for a row of the `patients` table
///
/// The table belongs to an external schema, so everything except the key may
/// be NULL and comes back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier for the patient
    pub patient_id: i64,

    /// Given name
    pub first_name: Option<String>,

    /// Family name
    pub last_name: Option<String>,

    /// Date of birth (SQL `DATE`, or the date part of a `DATETIME`)
    pub date_of_birth: Option<NaiveDate>,
}

impl<'r> FromRow<'r, MySqlRow> for Patient {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            patient_id: decode_id(row, "patient_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            date_of_birth: decode_date(row, "date_of_birth")?,
        })
    }
}

// sqlx keeps signed and UNSIGNED integer columns apart
fn decode_id(row: &MySqlRow, column: &str) -> Result<i64, sqlx::Error> {
    match row.try_get::<i64, _>(column) {
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let id: u64 = row.try_get(column)?;
            i64::try_from(id).map_err(|e| sqlx::Error::ColumnDecode {
                index: column.to_string(),
                source: Box::new(e),
            })
        }
        other => other,
    }
}

fn decode_date(row: &MySqlRow, column: &str) -> Result<Option<NaiveDate>, sqlx::Error> {
    match row.try_get::<Option<NaiveDate>, _>(column) {
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let timestamp: Option<NaiveDateTime> = row.try_get(column)?;
            Ok(timestamp.map(|t| t.date()))
        }
        other => other,
    }
}
