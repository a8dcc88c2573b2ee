//! Error types for the client service.

use thiserror::Error;

/// Errors that can occur during client-side secret operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Sealing or opening a field failed.
    #[error("Crypto error: {0}")]
    Crypto(#[from] keepsake_crypto::CryptoError),

    /// The remote store rejected or failed the request.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote store has no record with this id for the owner.
    #[error("Record not found: {0}")]
    NotFound(i64),

    /// Local file IO failed while sealing or restoring a file body.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
