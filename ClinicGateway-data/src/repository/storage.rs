use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use tracing::debug;

use crate::models::{Patient, Provider};
use super::errors::RepositoryError;
use super::patient::PatientRepositoryTrait;
use super::provider::ProviderRepositoryTrait;

const SELECT_PATIENTS: &str = "
    SELECT patient_id, first_name, last_name, date_of_birth
    FROM patients";

const SELECT_PATIENTS_BY_FIRST_NAME: &str = "
    SELECT patient_id, first_name, last_name, date_of_birth
    FROM patients
    WHERE first_name = ?";

const SELECT_PROVIDERS: &str = "
    SELECT first_name, last_name, provider_specialty
    FROM providers";

const SELECT_PROVIDERS_BY_SPECIALTY: &str = "
    SELECT first_name, last_name, provider_specialty
    FROM providers
    WHERE provider_specialty = ?";

/// MySQL-backed storage for patients and providers.
///
/// Each call checks a connection out of the pool for a single statement;
/// the checkout is returned when the query future completes, whether it
/// succeeded or not.
#[derive(Debug, Clone)]
pub struct MySqlStorage {
    pool: MySqlPool,
}

impl MySqlStorage {
    /// Wrap an existing pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl PatientRepositoryTrait for MySqlStorage {
    async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError> {
        debug!("Getting all patients from database");

        let patients = sqlx::query_as::<_, Patient>(SELECT_PATIENTS)
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} patients", patients.len());
        Ok(patients)
    }

    async fn find_patients_by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, RepositoryError> {
        debug!("Searching patients by first name");

        let patients = sqlx::query_as::<_, Patient>(SELECT_PATIENTS_BY_FIRST_NAME)
            .bind(first_name)
            .fetch_all(&self.pool)
            .await?;

        debug!("Matched {} patients", patients.len());
        Ok(patients)
    }
}

#[async_trait]
impl ProviderRepositoryTrait for MySqlStorage {
    async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError> {
        debug!("Getting all providers from database");

        let providers = sqlx::query_as::<_, Provider>(SELECT_PROVIDERS)
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} providers", providers.len());
        Ok(providers)
    }

    async fn find_providers_by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, RepositoryError> {
        debug!("Searching providers by specialty");

        let providers = sqlx::query_as::<_, Provider>(SELECT_PROVIDERS_BY_SPECIALTY)
            .bind(specialty)
            .fetch_all(&self.pool)
            .await?;

        debug!("Matched {} providers", providers.len());
        Ok(providers)
    }
}
