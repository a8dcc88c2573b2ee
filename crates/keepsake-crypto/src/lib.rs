//! Envelope encryption for Keepsake.
//!
//! This crate provides:
//! - PBKDF2-HMAC-SHA256 key derivation from the account master secret
//! - AES-256-GCM sealing/opening of individual secret values
//! - The per-kind field codec that decides which record fields are sealed,
//!   in what order, and under what optional-field rules
//!
//! The master secret never leaves the client; the derived key is computed
//! once per session, shared read-only, and never persisted.

pub mod cipher;
pub mod codec;
pub mod error;
pub mod kdf;

pub use cipher::{AeadCipher, NONCE_SIZE, TAG_SIZE};
pub use codec::{decrypt_record, encrypt_record, FieldSlot, SecretFields};
pub use error::{CryptoError, Result};
pub use kdf::{derive_key, session_key, DerivedKey, KdfConfig, KEY_SIZE};
