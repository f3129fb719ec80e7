use async_trait::async_trait;

use crate::models::Provider;
use super::errors::RepositoryError;

/// Read access to the `providers` table
#[async_trait]
pub trait ProviderRepositoryTrait: Send + Sync + std::fmt::Debug {
    /// Get every provider, in the store's default order
    async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError>;

    /// Get the providers whose specialty equals `specialty`
    async fn find_providers_by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, RepositoryError>;
}
