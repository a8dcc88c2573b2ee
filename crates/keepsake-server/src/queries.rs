//! The four per-kind query sets and their column bindings.
//!
//! This module is the only per-kind surface of the persistence layer:
//! each content kind contributes its descriptor and a [`ContentRow`]
//! binding impl, and the generic repository does the rest. A fifth kind
//! would add one descriptor, one row type, and one constructor here.

use chrono::Utc;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqlitePool;

use keepsake_core::ContentKind;

use crate::repository::{ContentQueries, ContentRepository, ContentRow};
use crate::rows::{
    CardRow, CardWithComment, FileRow, FileWithComment, PasswordRow, PasswordWithComment,
    TextRow, TextWithComment,
};

// Comment statements are shared by every kind; the content-type tag keeps
// their rows apart.
const INSERT_COMMENT: &str = "INSERT INTO comments (content_type, content_id, comment, created_at, updated_at) \
     VALUES (?, ?, ?, ?, ?)";
const UPDATE_COMMENT: &str =
    "UPDATE comments SET comment = ?, updated_at = ? WHERE content_type = ? AND content_id = ?";
const DELETE_COMMENT: &str = "DELETE FROM comments WHERE content_type = ? AND content_id = ?";

/// Query set for the password kind.
pub const PASSWORD_QUERIES: ContentQueries = ContentQueries {
    kind: ContentKind::Password,
    insert_content: "INSERT INTO passwords (owner_id, username, password, domain, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    update_content: "UPDATE passwords SET username = ?, password = ?, domain = ?, updated_at = ? \
         WHERE id = ? AND owner_id = ?",
    select_all: "SELECT p.id, p.username, p.password, p.domain, COALESCE(c.comment, '') AS comment \
         FROM passwords p \
         LEFT JOIN comments c ON c.content_type = 'password' AND c.content_id = p.id \
         WHERE p.owner_id = ?",
    select_one: "SELECT id, owner_id, username, password, domain, created_at, updated_at \
         FROM passwords WHERE owner_id = ? AND id = ?",
    delete_content: "DELETE FROM passwords WHERE id = ? AND owner_id = ?",
    insert_comment: INSERT_COMMENT,
    update_comment: UPDATE_COMMENT,
    delete_comment: DELETE_COMMENT,
};

/// Query set for the text kind.
pub const TEXT_QUERIES: ContentQueries = ContentQueries {
    kind: ContentKind::Text,
    insert_content: "INSERT INTO texts (owner_id, content, created_at, updated_at) VALUES (?, ?, ?, ?)",
    update_content: "UPDATE texts SET content = ?, updated_at = ? WHERE id = ? AND owner_id = ?",
    select_all: "SELECT t.id, t.content, COALESCE(c.comment, '') AS comment \
         FROM texts t \
         LEFT JOIN comments c ON c.content_type = 'text' AND c.content_id = t.id \
         WHERE t.owner_id = ?",
    select_one: "SELECT id, owner_id, content, created_at, updated_at \
         FROM texts WHERE owner_id = ? AND id = ?",
    delete_content: "DELETE FROM texts WHERE id = ? AND owner_id = ?",
    insert_comment: INSERT_COMMENT,
    update_comment: UPDATE_COMMENT,
    delete_comment: DELETE_COMMENT,
};

/// Query set for the card kind.
pub const CARD_QUERIES: ContentQueries = ContentQueries {
    kind: ContentKind::Card,
    insert_content: "INSERT INTO cards (owner_id, number, date, holder, cvv, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    update_content: "UPDATE cards SET number = ?, date = ?, holder = ?, cvv = ?, updated_at = ? \
         WHERE id = ? AND owner_id = ?",
    select_all: "SELECT k.id, k.number, k.date, k.holder, k.cvv, COALESCE(c.comment, '') AS comment \
         FROM cards k \
         LEFT JOIN comments c ON c.content_type = 'card' AND c.content_id = k.id \
         WHERE k.owner_id = ?",
    select_one: "SELECT id, owner_id, number, date, holder, cvv, created_at, updated_at \
         FROM cards WHERE owner_id = ? AND id = ?",
    delete_content: "DELETE FROM cards WHERE id = ? AND owner_id = ?",
    insert_comment: INSERT_COMMENT,
    update_comment: UPDATE_COMMENT,
    delete_comment: DELETE_COMMENT,
};

/// Query set for the file kind.
pub const FILE_QUERIES: ContentQueries = ContentQueries {
    kind: ContentKind::File,
    insert_content: "INSERT INTO files (owner_id, name, file_path, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?)",
    update_content: "UPDATE files SET name = ?, file_path = ?, updated_at = ? \
         WHERE id = ? AND owner_id = ?",
    select_all: "SELECT f.id, f.name, f.file_path, COALESCE(c.comment, '') AS comment \
         FROM files f \
         LEFT JOIN comments c ON c.content_type = 'file' AND c.content_id = f.id \
         WHERE f.owner_id = ?",
    select_one: "SELECT id, owner_id, name, file_path, created_at, updated_at \
         FROM files WHERE owner_id = ? AND id = ?",
    delete_content: "DELETE FROM files WHERE id = ? AND owner_id = ?",
    insert_comment: INSERT_COMMENT,
    update_comment: UPDATE_COMMENT,
    delete_comment: DELETE_COMMENT,
};

impl ContentRow for PasswordRow {
    fn id(&self) -> i64 {
        self.id
    }

    fn bind_insert<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(owner_id)
            .bind(self.username.clone())
            .bind(self.password.clone())
            .bind(self.domain.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(self.username.clone())
            .bind(self.password.clone())
            .bind(self.domain.clone())
            .bind(Utc::now())
            .bind(self.id)
            .bind(owner_id)
    }
}

impl ContentRow for TextRow {
    fn id(&self) -> i64 {
        self.id
    }

    fn bind_insert<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(owner_id)
            .bind(self.content.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(self.content.clone())
            .bind(Utc::now())
            .bind(self.id)
            .bind(owner_id)
    }
}

impl ContentRow for CardRow {
    fn id(&self) -> i64 {
        self.id
    }

    fn bind_insert<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(owner_id)
            .bind(self.number.clone())
            .bind(self.date.clone())
            .bind(self.holder.clone())
            .bind(self.cvv.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(self.number.clone())
            .bind(self.date.clone())
            .bind(self.holder.clone())
            .bind(self.cvv.clone())
            .bind(Utc::now())
            .bind(self.id)
            .bind(owner_id)
    }
}

impl ContentRow for FileRow {
    fn id(&self) -> i64 {
        self.id
    }

    fn bind_insert<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(owner_id)
            .bind(self.name.clone())
            .bind(self.file_path.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(
        &self,
        sql: &'q str,
        owner_id: i64,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        sqlx::query(sql)
            .bind(self.name.clone())
            .bind(self.file_path.clone())
            .bind(Utc::now())
            .bind(self.id)
            .bind(owner_id)
    }
}

/// Repository over the password kind.
pub fn password_repository(
    pool: SqlitePool,
) -> ContentRepository<PasswordRow, PasswordWithComment> {
    ContentRepository::new(pool, &PASSWORD_QUERIES)
}

/// Repository over the text kind.
pub fn text_repository(pool: SqlitePool) -> ContentRepository<TextRow, TextWithComment> {
    ContentRepository::new(pool, &TEXT_QUERIES)
}

/// Repository over the card kind.
pub fn card_repository(pool: SqlitePool) -> ContentRepository<CardRow, CardWithComment> {
    ContentRepository::new(pool, &CARD_QUERIES)
}

/// Repository over the file kind.
pub fn file_repository(pool: SqlitePool) -> ContentRepository<FileRow, FileWithComment> {
    ContentRepository::new(pool, &FILE_QUERIES)
}
