//! Server-side persistence for Keepsake.
//!
//! This crate provides:
//! - [`ContentRepository`], one generic implementation persisting opaque
//!   ciphertext content together with its comment row, atomically
//! - The four per-kind query sets and row bindings
//! - Pool configuration and table setup
//!
//! HTTP routing, JWT verification, and migration running are collaborator
//! concerns; handlers call into this crate with an already-authenticated
//! [`keepsake_core::AuthContext`].

pub mod config;
pub mod error;
pub mod queries;
pub mod repository;
pub mod rows;
pub mod schema;

pub use config::{connect, StoreConfig};
pub use error::{Result, StoreError};
pub use queries::{
    card_repository, file_repository, password_repository, text_repository, CARD_QUERIES,
    FILE_QUERIES, PASSWORD_QUERIES, TEXT_QUERIES,
};
pub use repository::{ContentQueries, ContentRepository, ContentRow};
pub use rows::{
    CardRow, CardWithComment, CommentRow, FileRow, FileWithComment, PasswordRow,
    PasswordWithComment, TextRow, TextWithComment,
};
pub use schema::init_schema;
