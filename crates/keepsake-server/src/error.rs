//! Error types for the persistence layer.

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row exists for the given owner and id.
    ///
    /// Callers translate this into a "not found" response; everything else
    /// is an infrastructure failure and must not be conflated with it.
    #[error("Record does not exist")]
    NotExist,

    /// Any other transaction or statement failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience result alias for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
