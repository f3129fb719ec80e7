use thiserror::Error;

// Database modules
pub mod connection;

// Re-export database connection functions
pub use connection::*;

/// Database error enum
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Required environment variable was not set
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// A port variable could not be parsed
    #[error("Invalid port in {var}: {value:?}")]
    InvalidPort {
        var: String,
        value: String,
    },

    /// Connection error
    #[error("Failed to connect to database: {0}")]
    ConnectionError(#[from] sqlx::Error),
}
