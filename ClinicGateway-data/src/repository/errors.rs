use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Query execution or connection checkout failed
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    /// Backing store is unreachable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
