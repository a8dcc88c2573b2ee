//! Error types for the encryption layer.

use thiserror::Error;

/// Errors that can occur while sealing or opening secret fields.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key material is missing, empty, or has the wrong size for the cipher.
    #[error("Invalid key material: {0}")]
    InvalidKey(String),

    /// AEAD sealing failed.
    #[error("Encryption failed: {0}")]
    Encrypt(String),

    /// AEAD opening failed: truncated input, wrong key, or tampered data.
    #[error("Decryption failed: {0}")]
    Decrypt(String),
}

/// Convenience result alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
