//! Master secret handling with memory protection.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The account's master password, held only in client memory.
///
/// The master secret is the input to key derivation and must never be
/// transmitted or persisted. It is zeroed on drop, and it deliberately
/// implements neither `Serialize` nor `Deserialize` so it cannot end up
/// in a wire payload or a config file by accident.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterSecret {
    inner: String,
}

impl MasterSecret {
    /// Wrap a plaintext master password.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Expose the secret bytes for key derivation.
    ///
    /// Use sparingly - only when the actual value is needed.
    pub fn expose_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Check if the secret is empty.
    ///
    /// An empty master secret is unusual but permitted; key derivation
    /// handles it deterministically rather than failing.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl Default for MasterSecret {
    fn default() -> Self {
        Self {
            inner: String::new(),
        }
    }
}

// Never print secrets
impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl PartialEq for MasterSecret {
    fn eq(&self, other: &Self) -> bool {
        // Use constant-time comparison for security
        constant_time_eq(self.inner.as_bytes(), other.inner.as_bytes())
    }
}

impl Eq for MasterSecret {}

impl From<String> for MasterSecret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MasterSecret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
