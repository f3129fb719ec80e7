// Repository module structure
pub mod errors;
mod patient;
mod provider;
mod storage;

#[cfg(any(test, feature = "mock"))]
mod in_memory;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use patient::PatientRepositoryTrait;
pub use provider::ProviderRepositoryTrait;
pub use storage::MySqlStorage;

// In-memory storage for tests, both here and in the api crate via the mock feature
#[cfg(any(test, feature = "mock"))]
pub use in_memory::InMemoryStorage;
