//! Generic, owner-scoped content persistence.
//!
//! One repository implementation covers all four content kinds. The
//! per-kind differences are confined to a [`ContentQueries`] descriptor
//! (the SQL) and a [`ContentRow`] impl (column binding); everything else -
//! transactional create/update, joined reads, two-table deletes - is
//! written once.
//!
//! Every statement's predicate includes the owner id. There is no code
//! path that reaches a row by id alone, so one account can never observe
//! or mutate another account's rows, even by guessing ids.
//!
//! Transactions are scoped to a single call and never span a round-trip
//! to the client. If a caller's future is cancelled mid-call, the
//! transaction guard is dropped and the database rolls back; a partial
//! write is never committed.

use chrono::Utc;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{FromRow, SqlitePool};
use std::marker::PhantomData;
use tracing::debug;

use keepsake_core::{AuthContext, ContentKind};

use crate::error::{Result, StoreError};

/// Per-kind query set: the SQL a [`ContentRepository`] runs, plus the
/// content-type tag written to the comment table.
///
/// Comment statement parameter order is fixed by the repository:
/// insert binds `(content_type, content_id, comment, created_at,
/// updated_at)`, update binds `(comment, updated_at, content_type,
/// content_id)`.
pub struct ContentQueries {
    pub kind: ContentKind,
    pub insert_content: &'static str,
    pub update_content: &'static str,
    pub select_all: &'static str,
    pub select_one: &'static str,
    pub delete_content: &'static str,
    pub insert_comment: &'static str,
    pub update_comment: &'static str,
    pub delete_comment: &'static str,
}

/// A content table row that can bind itself onto its kind's statements.
pub trait ContentRow: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin {
    /// Row id; 0 means not yet persisted.
    fn id(&self) -> i64;

    /// Bind this row's columns onto its kind's insert statement.
    fn bind_insert<'q>(&self, sql: &'q str, owner_id: i64)
        -> Query<'q, Sqlite, SqliteArguments<'q>>;

    /// Bind this row's columns onto its kind's update statement.
    ///
    /// The statement must be scoped by `(id, owner_id)`; the repository
    /// checks the affected-row count to distinguish "not yours / not
    /// there" from success.
    fn bind_update<'q>(&self, sql: &'q str, owner_id: i64)
        -> Query<'q, Sqlite, SqliteArguments<'q>>;
}

/// Generic repository over a content kind `T` and its comment-joined
/// projection `Y`.
pub struct ContentRepository<T, Y> {
    pool: SqlitePool,
    queries: &'static ContentQueries,
    _marker: PhantomData<fn() -> (T, Y)>,
}

impl<T, Y> ContentRepository<T, Y>
where
    T: ContentRow,
    Y: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    /// Build a repository around `pool` running `queries`.
    pub fn new(pool: SqlitePool, queries: &'static ContentQueries) -> Self {
        Self {
            pool,
            queries,
            _marker: PhantomData,
        }
    }

    /// Persist a content row and its comment as one atomic unit.
    ///
    /// An unset id (0) inserts both rows, pairing the comment with the
    /// generated content id; a set id updates both in place. Any step
    /// failing rolls the whole transaction back, so no content row is ever
    /// observable without its comment, and vice versa. Returns the content
    /// id.
    pub async fn create(&self, ctx: &AuthContext, row: &T, comment: &str) -> Result<i64> {
        let q = self.queries;
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let content_id = if row.id() == 0 {
            let result = row
                .bind_insert(q.insert_content, ctx.owner_id)
                .execute(&mut *tx)
                .await?;
            let id = result.last_insert_rowid();

            sqlx::query(q.insert_comment)
                .bind(q.kind.as_str())
                .bind(id)
                .bind(comment)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            id
        } else {
            let result = row
                .bind_update(q.update_content, ctx.owner_id)
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() == 0 {
                // Dropping the transaction rolls it back.
                return Err(StoreError::NotExist);
            }

            sqlx::query(q.update_comment)
                .bind(comment)
                .bind(now)
                .bind(q.kind.as_str())
                .bind(row.id())
                .execute(&mut *tx)
                .await?;
            row.id()
        };

        tx.commit().await?;
        debug!(kind = %q.kind, content_id, owner_id = ctx.owner_id, "stored content");
        Ok(content_id)
    }

    /// All of the owner's rows of this kind, each joined with its comment.
    ///
    /// The join is a LEFT JOIN: a content row with no comment row is still
    /// returned, with an empty comment. No ordering is imposed.
    pub async fn get_by_owner(&self, ctx: &AuthContext) -> Result<Vec<Y>> {
        let rows = sqlx::query_as::<_, Y>(self.queries.select_all)
            .bind(ctx.owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// One row by owner and id.
    ///
    /// [`StoreError::NotExist`] when nothing matches - including when the
    /// id exists but belongs to another owner.
    pub async fn get_by_owner_and_id(&self, ctx: &AuthContext, id: i64) -> Result<T> {
        sqlx::query_as::<_, T>(self.queries.select_one)
            .bind(ctx.owner_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotExist)
    }

    /// Delete a content row and its comment as one atomic unit.
    ///
    /// The content delete is scoped by (id, owner); a zero affected-row
    /// count aborts with [`StoreError::NotExist`] before the comment is
    /// touched.
    pub async fn delete_by_owner_and_id(&self, ctx: &AuthContext, id: i64) -> Result<()> {
        let q = self.queries;
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(q.delete_content)
            .bind(id)
            .bind(ctx.owner_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotExist);
        }

        sqlx::query(q.delete_comment)
            .bind(q.kind.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(kind = %q.kind, content_id = id, owner_id = ctx.owner_id, "deleted content");
        Ok(())
    }
}
