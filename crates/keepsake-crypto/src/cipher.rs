//! AES-256-GCM sealing and opening of individual secret values.
//!
//! Output is self-describing: a fresh random nonce is prepended to the
//! ciphertext (which carries the authentication tag), so callers only need
//! to keep track of one opaque byte bundle per value.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;

use crate::error::{CryptoError, Result};
use crate::kdf::DerivedKey;

/// Nonce length prepended to every sealed value.
pub const NONCE_SIZE: usize = 12;

/// Authentication tag length appended by AES-GCM.
pub const TAG_SIZE: usize = 16;

/// Stateless AEAD sealing/opening primitive over one derived key.
///
/// All methods take `&self`; the cipher holds no mutable state and is safe
/// to share across tasks sealing fields of one record, or several records,
/// concurrently.
#[derive(Clone)]
pub struct AeadCipher {
    cipher: Aes256Gcm,
}

impl AeadCipher {
    /// Build a cipher from a derived session key.
    ///
    /// Fails if the key is empty or not the 32 bytes AES-256 expects.
    pub fn new(key: &DerivedKey) -> Result<Self> {
        if key.is_empty() {
            return Err(CryptoError::InvalidKey("key is empty".to_string()));
        }
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| {
            CryptoError::InvalidKey(format!(
                "expected a 32-byte key, got {} bytes",
                key.len()
            ))
        })?;
        Ok(Self { cipher })
    }

    /// Seal `plaintext`, returning `nonce || ciphertext || tag`.
    ///
    /// A fresh random nonce is drawn on every call, so sealing the same
    /// plaintext twice produces different output.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);

        let nonce = Nonce::from_slice(&nonce_bytes);
        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CryptoError::Encrypt(e.to_string()))?;

        // Prepend nonce to ciphertext so open can split it back out.
        let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);

        Ok(sealed)
    }

    /// Open data previously produced by [`seal`](Self::seal).
    ///
    /// Empty input opens to empty plaintext: an optional field that was
    /// never sealed round-trips as a no-op instead of an error. Anything
    /// else shorter than a nonce, or failing tag verification, is rejected.
    pub fn open(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        if sealed.is_empty() {
            return Ok(Vec::new());
        }
        if sealed.len() < NONCE_SIZE {
            return Err(CryptoError::Decrypt("ciphertext too short".to_string()));
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_SIZE);

        let nonce = Nonce::from_slice(nonce_bytes);
        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| CryptoError::Decrypt(e.to_string()))
    }
}
