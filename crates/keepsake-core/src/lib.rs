//! Core types for Keepsake.
//!
//! This crate defines the vocabulary shared by the client and server:
//! - The four secret record kinds (password, text, card, file)
//! - The [`ContentKind`] discriminator used to tag persisted content
//! - [`MasterSecret`], a zeroize-on-drop wrapper for the account password
//! - [`AuthContext`], the authenticated-owner context threaded through
//!   every service and repository call

pub mod context;
pub mod record;
pub mod secret;

pub use context::AuthContext;
pub use record::{CardRecord, ContentKind, FileRecord, PasswordRecord, TextRecord};
pub use secret::MasterSecret;
