//! Symmetric key derivation from the account master secret.
//!
//! PBKDF2-HMAC-SHA256 stretches an arbitrary-length, arbitrary-strength
//! master secret into a fixed-length cipher key. Derivation is
//! deterministic: a returning session re-derives the same key from the
//! same secret and parameters instead of persisting it anywhere.

use hmac::Hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use keepsake_core::MasterSecret;

/// Key length expected by the AEAD cipher (AES-256).
pub const KEY_SIZE: usize = 32;

/// Parameters for session key derivation.
///
/// The salt and iteration count are fixed per deployment and shipped in
/// client configuration; changing either yields a different key and makes
/// previously sealed data unreadable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KdfConfig {
    /// Salt mixed into the derivation.
    #[serde(default = "default_salt")]
    pub salt: String,

    /// PBKDF2 iteration count.
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Derived key length in bytes.
    #[serde(default = "default_key_len")]
    pub key_len: usize,
}

fn default_salt() -> String {
    "keepsake/kdf/v1".to_string()
}

fn default_iterations() -> u32 {
    100_000
}

fn default_key_len() -> usize {
    KEY_SIZE
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            salt: default_salt(),
            iterations: default_iterations(),
            key_len: default_key_len(),
        }
    }
}

/// A derived symmetric key, zeroed on drop.
///
/// Computed once at login and shared read-only across the session's tasks;
/// never persisted and never transmitted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: Vec<u8>,
}

impl DerivedKey {
    /// Expose the raw key bytes for cipher construction.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the key in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the key is empty (never true for a derived key).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Never print key material
impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive a key of `length` bytes from `secret` via PBKDF2-HMAC-SHA256.
///
/// Deterministic for identical inputs. Secrets shorter than the output
/// length are stretched by the KDF rather than rejected, and the empty
/// secret is permitted: the result is then a function of salt and
/// iteration count alone.
pub fn derive_key(secret: &[u8], salt: &[u8], iterations: u32, length: usize) -> DerivedKey {
    let mut bytes = vec![0u8; length];
    // HMAC-SHA256 accepts keys of any length, so this cannot fail.
    pbkdf2::pbkdf2::<Hmac<Sha256>>(secret, salt, iterations, &mut bytes)
        .expect("PBKDF2 with HMAC-SHA256 accepts any key length");
    DerivedKey { bytes }
}

/// Derive the session key for a master secret using configured parameters.
pub fn session_key(secret: &MasterSecret, config: &KdfConfig) -> DerivedKey {
    derive_key(
        secret.expose_bytes(),
        config.salt.as_bytes(),
        config.iterations,
        config.key_len,
    )
}
