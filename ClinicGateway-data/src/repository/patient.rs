use async_trait::async_trait;

use crate::models::Patient;
use super::errors::RepositoryError;

/// Read access to the `patients` table
#[async_trait]
pub trait PatientRepositoryTrait: Send + Sync + std::fmt::Debug {
    /// Get every patient, in the store's default order
    async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError>;

    /// Get the patients whose first name equals `first_name`
    ///
    /// Equality follows the store's collation.
    async fn find_patients_by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, RepositoryError>;
}
