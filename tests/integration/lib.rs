//! Shared wiring for end-to-end tests: client services talking to the
//! server repository in-process, with no HTTP layer in between.
//!
//! The transports here do exactly what the per-kind HTTP handlers do in a
//! deployment: convert wire records to rows, hand them to the generic
//! repository under the caller's owner context, and map `NotExist` to the
//! client's not-found error.

use async_trait::async_trait;

use keepsake_client::{ClientError, RecordTransport};
use keepsake_core::{AuthContext, CardRecord, PasswordRecord};
use keepsake_server::{
    CardRow, CardWithComment, ContentRepository, PasswordRow, PasswordWithComment, StoreError,
};

fn map_store_error(err: StoreError, id: i64) -> ClientError {
    match err {
        StoreError::NotExist => ClientError::NotFound(id),
        other => ClientError::Transport(other.to_string()),
    }
}

/// Password records persisted through the generic repository.
pub struct PasswordStoreTransport {
    pub repo: ContentRepository<PasswordRow, PasswordWithComment>,
}

#[async_trait]
impl RecordTransport<PasswordRecord> for PasswordStoreTransport {
    async fn list(&self, ctx: &AuthContext) -> Result<Vec<PasswordRecord>, ClientError> {
        let rows = self
            .repo
            .get_by_owner(ctx)
            .await
            .map_err(|e| map_store_error(e, 0))?;
        Ok(rows
            .into_iter()
            .map(|row| PasswordRecord {
                id: row.id,
                username: row.username,
                password: row.password,
                domain: row.domain,
                comment: row.comment,
            })
            .collect())
    }

    async fn create(&self, ctx: &AuthContext, record: &PasswordRecord) -> Result<i64, ClientError> {
        let row = PasswordRow::new(
            ctx.owner_id,
            record.username.clone(),
            record.password.clone(),
            record.domain.clone(),
        );
        self.repo
            .create(ctx, &row, &record.comment)
            .await
            .map_err(|e| map_store_error(e, 0))
    }

    async fn update(&self, ctx: &AuthContext, record: &PasswordRecord) -> Result<(), ClientError> {
        let mut row = PasswordRow::new(
            ctx.owner_id,
            record.username.clone(),
            record.password.clone(),
            record.domain.clone(),
        );
        row.id = record.id;
        self.repo
            .create(ctx, &row, &record.comment)
            .await
            .map(|_| ())
            .map_err(|e| map_store_error(e, record.id))
    }

    async fn delete(&self, ctx: &AuthContext, id: i64) -> Result<(), ClientError> {
        self.repo
            .delete_by_owner_and_id(ctx, id)
            .await
            .map_err(|e| map_store_error(e, id))
    }
}

/// Card records persisted through the generic repository.
pub struct CardStoreTransport {
    pub repo: ContentRepository<CardRow, CardWithComment>,
}

#[async_trait]
impl RecordTransport<CardRecord> for CardStoreTransport {
    async fn list(&self, ctx: &AuthContext) -> Result<Vec<CardRecord>, ClientError> {
        let rows = self
            .repo
            .get_by_owner(ctx)
            .await
            .map_err(|e| map_store_error(e, 0))?;
        Ok(rows
            .into_iter()
            .map(|row| CardRecord {
                id: row.id,
                number: row.number,
                date: row.date,
                holder: row.holder,
                cvv: row.cvv,
                comment: row.comment,
            })
            .collect())
    }

    async fn create(&self, ctx: &AuthContext, record: &CardRecord) -> Result<i64, ClientError> {
        let row = CardRow::new(
            ctx.owner_id,
            record.number.clone(),
            record.date.clone(),
            record.holder.clone(),
            record.cvv.clone(),
        );
        self.repo
            .create(ctx, &row, &record.comment)
            .await
            .map_err(|e| map_store_error(e, 0))
    }

    async fn update(&self, ctx: &AuthContext, record: &CardRecord) -> Result<(), ClientError> {
        let mut row = CardRow::new(
            ctx.owner_id,
            record.number.clone(),
            record.date.clone(),
            record.holder.clone(),
            record.cvv.clone(),
        );
        row.id = record.id;
        self.repo
            .create(ctx, &row, &record.comment)
            .await
            .map(|_| ())
            .map_err(|e| map_store_error(e, record.id))
    }

    async fn delete(&self, ctx: &AuthContext, id: i64) -> Result<(), ClientError> {
        self.repo
            .delete_by_owner_and_id(ctx, id)
            .await
            .map_err(|e| map_store_error(e, id))
    }
}
