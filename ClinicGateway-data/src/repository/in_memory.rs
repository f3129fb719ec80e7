use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::models::{Patient, Provider};
use super::errors::RepositoryError;
use super::patient::PatientRepositoryTrait;
use super::provider::ProviderRepositoryTrait;

/// In-memory storage implementation for patients and providers
///
/// Rows are returned in insertion order. `with_failure` makes every query
/// fail, standing in for an unreachable database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    patients: Arc<RwLock<Vec<Patient>>>,
    providers: Arc<RwLock<Vec<Provider>>>,
    should_fail: bool,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure every query to fail
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Add a patient row
    pub fn with_patient(self, patient: Patient) -> Self {
        self.with_patients(vec![patient])
    }

    /// Add multiple patient rows
    pub fn with_patients(self, patients: Vec<Patient>) -> Self {
        if let Ok(mut store) = self.patients.write() {
            store.extend(patients);
        }
        self
    }

    /// Add a provider row
    pub fn with_provider(self, provider: Provider) -> Self {
        self.with_providers(vec![provider])
    }

    /// Add multiple provider rows
    pub fn with_providers(self, providers: Vec<Provider>) -> Self {
        if let Ok(mut store) = self.providers.write() {
            store.extend(providers);
        }
        self
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.should_fail {
            Err(RepositoryError::Unavailable("connect ECONNREFUSED (simulated)".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PatientRepositoryTrait for InMemoryStorage {
    async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError> {
        self.check_available()?;
        let store = self.patients.read()?;
        Ok(store.clone())
    }

    async fn find_patients_by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, RepositoryError> {
        self.check_available()?;
        let store = self.patients.read()?;
        Ok(store.iter().filter(|p| p.first_name.as_deref() == Some(first_name)).cloned().collect())
    }
}

#[async_trait]
impl ProviderRepositoryTrait for InMemoryStorage {
    async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError> {
        self.check_available()?;
        let store = self.providers.read()?;
        Ok(store.clone())
    }

    async fn find_providers_by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, RepositoryError> {
        self.check_available()?;
        let store = self.providers.read()?;
        Ok(store
            .iter()
            .filter(|p| p.provider_specialty.as_deref() == Some(specialty))
            .cloned()
            .collect())
    }
}
