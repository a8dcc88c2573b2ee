//! Transport seam between the secret service and the remote store.
//!
//! The real implementation is the authenticated HTTP client (out of scope
//! here); [`InMemoryTransport`] backs unit tests and local runs. Records
//! cross this boundary already sealed - a transport never sees plaintext
//! secret fields.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use keepsake_core::AuthContext;

use crate::error::{ClientError, Result};

/// Authenticated request/response exchange for one record kind.
#[async_trait]
pub trait RecordTransport<R>: Send + Sync {
    /// Fetch all of the owner's records of this kind.
    async fn list(&self, ctx: &AuthContext) -> Result<Vec<R>>;

    /// Submit a new record; returns the server-assigned id.
    async fn create(&self, ctx: &AuthContext, record: &R) -> Result<i64>;

    /// Replace an existing record by its id.
    async fn update(&self, ctx: &AuthContext, record: &R) -> Result<()>;

    /// Delete a record by its id.
    async fn delete(&self, ctx: &AuthContext, id: i64) -> Result<()>;
}

#[async_trait]
impl<R, T> RecordTransport<R> for Arc<T>
where
    R: Send + Sync + 'static,
    T: RecordTransport<R> + ?Sized,
{
    async fn list(&self, ctx: &AuthContext) -> Result<Vec<R>> {
        (**self).list(ctx).await
    }

    async fn create(&self, ctx: &AuthContext, record: &R) -> Result<i64> {
        (**self).create(ctx, record).await
    }

    async fn update(&self, ctx: &AuthContext, record: &R) -> Result<()> {
        (**self).update(ctx, record).await
    }

    async fn delete(&self, ctx: &AuthContext, id: i64) -> Result<()> {
        (**self).delete(ctx, id).await
    }
}

/// In-memory transport keyed by (owner, record id).
///
/// Owner scoping mirrors the server: every operation filters on the
/// caller's owner id, so one owner's records are invisible to another.
pub struct InMemoryTransport<R> {
    records: Mutex<HashMap<(i64, i64), R>>,
    next_id: AtomicI64,
}

impl<R> InMemoryTransport<R> {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<R> Default for InMemoryTransport<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Gives records an id slot the transport can read and assign.
pub trait HasId {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

impl HasId for keepsake_core::PasswordRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl HasId for keepsake_core::TextRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl HasId for keepsake_core::CardRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl HasId for keepsake_core::FileRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[async_trait]
impl<R> RecordTransport<R> for InMemoryTransport<R>
where
    R: HasId + Clone + Send + Sync,
{
    async fn list(&self, ctx: &AuthContext) -> Result<Vec<R>> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|((owner, _), _)| *owner == ctx.owner_id)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn create(&self, ctx: &AuthContext, record: &R) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = record.clone();
        stored.set_id(id);
        self.records
            .lock()
            .await
            .insert((ctx.owner_id, id), stored);
        Ok(id)
    }

    async fn update(&self, ctx: &AuthContext, record: &R) -> Result<()> {
        let mut records = self.records.lock().await;
        let key = (ctx.owner_id, record.id());
        if !records.contains_key(&key) {
            return Err(ClientError::NotFound(record.id()));
        }
        records.insert(key, record.clone());
        Ok(())
    }

    async fn delete(&self, ctx: &AuthContext, id: i64) -> Result<()> {
        let mut records = self.records.lock().await;
        records
            .remove(&(ctx.owner_id, id))
            .map(|_| ())
            .ok_or(ClientError::NotFound(id))
    }
}
