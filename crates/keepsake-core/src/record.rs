//! Secret record shapes exchanged between client and server.
//!
//! Each record kind has a fixed set of secret byte fields. On the client
//! those fields hold plaintext before sealing and `nonce || ciphertext || tag`
//! bundles after; the server only ever sees the sealed form and stores it
//! verbatim. Secret fields travel as base64 strings inside JSON payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the four structurally distinct content kinds.
///
/// The string form is the `content_type` tag on the shared comment table,
/// so its values are part of the persisted layout and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Password,
    Text,
    Card,
    File,
}

impl ContentKind {
    /// Stable string tag used in the comment table and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Password => "password",
            ContentKind::Text => "text",
            ContentKind::Card => "card",
            ContentKind::File => "file",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde helper: binary secret fields as base64 strings in JSON.
pub mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

/// A login credential: username and password for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    /// Server-assigned id; 0 means not yet persisted.
    #[serde(default)]
    pub id: i64,

    /// Login name (secret).
    #[serde(with = "base64_bytes")]
    pub username: Vec<u8>,

    /// Login password (secret).
    #[serde(with = "base64_bytes")]
    pub password: Vec<u8>,

    /// Site or service the credential belongs to (plaintext).
    pub domain: String,

    /// Free-form note (plaintext metadata).
    pub comment: String,
}

/// An arbitrary free-text secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Server-assigned id; 0 means not yet persisted.
    #[serde(default)]
    pub id: i64,

    /// The note body (secret).
    #[serde(with = "base64_bytes")]
    pub text: Vec<u8>,

    /// Free-form note (plaintext metadata).
    pub comment: String,
}

/// A payment card.
///
/// Only the number is mandatory; date, holder and cvv are sealed only when
/// present, and their relative order is fixed by the field codec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Server-assigned id; 0 means not yet persisted.
    #[serde(default)]
    pub id: i64,

    /// Card number (secret, required).
    #[serde(with = "base64_bytes")]
    pub number: Vec<u8>,

    /// Expiry date (secret, optional).
    #[serde(with = "base64_bytes", default)]
    pub date: Vec<u8>,

    /// Card holder name (secret, optional).
    #[serde(with = "base64_bytes", default)]
    pub holder: Vec<u8>,

    /// Verification code (secret, optional).
    #[serde(with = "base64_bytes", default)]
    pub cvv: Vec<u8>,

    /// Free-form note (plaintext metadata).
    pub comment: String,
}

/// Metadata for a stored file.
///
/// The file body itself is sealed as one whole-payload operation and moved
/// through the upload/download transport; only the display name is a secret
/// field of the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Server-assigned id; 0 means not yet persisted.
    #[serde(default)]
    pub id: i64,

    /// Original file name (secret).
    #[serde(with = "base64_bytes")]
    pub name: Vec<u8>,

    /// Server-side storage path, assigned on upload (plaintext).
    #[serde(default)]
    pub file_path: String,

    /// Free-form note (plaintext metadata).
    pub comment: String,
}
