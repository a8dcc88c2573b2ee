//! Table setup for the content store.
//!
//! One table per content kind holding opaque ciphertext columns plus the
//! owning account, and one shared comment table keyed by
//! (content_type, content_id). Statement execution order does not matter;
//! everything is `IF NOT EXISTS`. Running migrations at deploy time is a
//! collaborator concern; this module only guarantees the layout exists for
//! embedded and test use.

use sqlx::SqlitePool;

use crate::error::Result;

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS passwords (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id    INTEGER NOT NULL,
        username    BLOB NOT NULL,
        password    BLOB NOT NULL,
        domain      TEXT NOT NULL DEFAULT '',
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS texts (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id    INTEGER NOT NULL,
        content     BLOB NOT NULL,
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cards (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id    INTEGER NOT NULL,
        number      BLOB NOT NULL,
        date        BLOB NOT NULL DEFAULT x'',
        holder      BLOB NOT NULL DEFAULT x'',
        cvv         BLOB NOT NULL DEFAULT x'',
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS files (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id    INTEGER NOT NULL,
        name        BLOB NOT NULL,
        file_path   TEXT NOT NULL DEFAULT '',
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS comments (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        content_type TEXT NOT NULL,
        content_id   INTEGER NOT NULL,
        comment      TEXT NOT NULL DEFAULT '',
        created_at   TEXT NOT NULL,
        updated_at   TEXT NOT NULL,
        UNIQUE (content_type, content_id)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_passwords_owner ON passwords (owner_id)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_texts_owner ON texts (owner_id)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_cards_owner ON cards (owner_id)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_files_owner ON files (owner_id)
    "#,
];

/// Create the content tables and the shared comment table if absent.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
