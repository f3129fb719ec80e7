pub mod patients;
pub mod providers;
pub mod root;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use patients::{get_patients, search_patients, PatientStore};
pub use providers::{get_providers, search_providers, ProviderStore};
pub use root::liveness;
