//! Client-side secret service for Keepsake.
//!
//! This crate provides:
//! - [`SecretService`], which wraps a transport with the
//!   encrypt-before-submit / fetch-then-decrypt record cycle
//! - [`RecordTransport`], the seam to the authenticated remote store
//! - Whole-file sealing for the file content kind
//!
//! The interactive forms and HTTP plumbing live elsewhere; they hand this
//! crate typed records and an [`keepsake_core::AuthContext`].

pub mod error;
pub mod service;
pub mod transport;

pub use error::{ClientError, Result};
pub use service::{DecryptedItem, SecretService};
pub use transport::{InMemoryTransport, RecordTransport};
