//! Row types for the content tables.
//!
//! Content rows carry opaque ciphertext columns exactly as the client
//! sealed them; the server never inspects or re-encrypts them. Each kind
//! also has a comment-joined projection used by the list reads.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored login credential.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordRow {
    pub id: i64,
    pub owner_id: i64,
    /// Sealed login name.
    pub username: Vec<u8>,
    /// Sealed login password.
    pub password: Vec<u8>,
    pub domain: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PasswordRow {
    /// New unsaved row (id 0) stamped with the current time.
    pub fn new(owner_id: i64, username: Vec<u8>, password: Vec<u8>, domain: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            owner_id,
            username,
            password,
            domain,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A stored free-text secret.
#[derive(Debug, Clone, FromRow)]
pub struct TextRow {
    pub id: i64,
    pub owner_id: i64,
    /// Sealed note body.
    pub content: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TextRow {
    /// New unsaved row (id 0) stamped with the current time.
    pub fn new(owner_id: i64, content: Vec<u8>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            owner_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A stored payment card.
///
/// Optional fields the client never sealed arrive (and stay) as empty
/// blobs.
#[derive(Debug, Clone, FromRow)]
pub struct CardRow {
    pub id: i64,
    pub owner_id: i64,
    pub number: Vec<u8>,
    pub date: Vec<u8>,
    pub holder: Vec<u8>,
    pub cvv: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CardRow {
    /// New unsaved row (id 0) stamped with the current time.
    pub fn new(
        owner_id: i64,
        number: Vec<u8>,
        date: Vec<u8>,
        holder: Vec<u8>,
        cvv: Vec<u8>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            owner_id,
            number,
            date,
            holder,
            cvv,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Stored metadata for an uploaded file.
#[derive(Debug, Clone, FromRow)]
pub struct FileRow {
    pub id: i64,
    pub owner_id: i64,
    /// Sealed original file name.
    pub name: Vec<u8>,
    /// Server-assigned storage path of the sealed body.
    pub file_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FileRow {
    /// New unsaved row (id 0) stamped with the current time.
    pub fn new(owner_id: i64, name: Vec<u8>, file_path: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            owner_id,
            name,
            file_path,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A metadata row in the shared comment table.
///
/// One comment exists per content row per kind; it is created, updated and
/// deleted together with its content row and never outlives it.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: i64,
    pub content_type: String,
    pub content_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Password row joined with its comment.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordWithComment {
    pub id: i64,
    pub username: Vec<u8>,
    pub password: Vec<u8>,
    pub domain: String,
    pub comment: String,
}

/// Text row joined with its comment.
#[derive(Debug, Clone, FromRow)]
pub struct TextWithComment {
    pub id: i64,
    pub content: Vec<u8>,
    pub comment: String,
}

/// Card row joined with its comment.
#[derive(Debug, Clone, FromRow)]
pub struct CardWithComment {
    pub id: i64,
    pub number: Vec<u8>,
    pub date: Vec<u8>,
    pub holder: Vec<u8>,
    pub cvv: Vec<u8>,
    pub comment: String,
}

/// File row joined with its comment.
#[derive(Debug, Clone, FromRow)]
pub struct FileWithComment {
    pub id: i64,
    pub name: Vec<u8>,
    pub file_path: String,
    pub comment: String,
}
