// Storage models mirroring the rows read from the database
pub mod patient;
pub mod provider;

pub use patient::Patient;
pub use provider::Provider;
