//! Client-side orchestration of sealing around the record lifecycle.

use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, warn};

use keepsake_core::{AuthContext, FileRecord};
use keepsake_crypto::{decrypt_record, encrypt_record, AeadCipher, SecretFields};

use crate::error::Result;
use crate::transport::RecordTransport;

/// One element of a batch listing: the record plus whether its secret
/// fields were successfully opened.
///
/// A record that failed to open is returned in its sealed form so the UI
/// can render "not decrypted" instead of hiding the whole listing.
#[derive(Debug, Clone)]
pub struct DecryptedItem<R> {
    pub record: R,
    pub decrypted: bool,
}

/// Secret service for one record kind.
///
/// Wraps a transport with the encrypt-before-submit / fetch-then-decrypt
/// cycle. The cipher is cheap to clone, so one session typically builds a
/// service per kind around the same derived key.
pub struct SecretService<R, T> {
    cipher: AeadCipher,
    transport: T,
    _record: PhantomData<fn() -> R>,
}

impl<R, T> SecretService<R, T>
where
    R: SecretFields + Clone + Send,
    T: RecordTransport<R>,
{
    /// Create a service over `transport` sealing with `cipher`.
    pub fn new(transport: T, cipher: AeadCipher) -> Self {
        Self {
            cipher,
            transport,
            _record: PhantomData,
        }
    }

    /// Fetch all of the owner's records and open each one.
    ///
    /// This is the one batch path where failures are isolated rather than
    /// propagated: a record that cannot be opened (corrupt, or sealed under
    /// a different key) is flagged and returned sealed, and the rest of the
    /// listing is unaffected.
    pub async fn get_all(&self, ctx: &AuthContext) -> Result<Vec<DecryptedItem<R>>> {
        let records = self.transport.list(ctx).await?;

        let mut items = Vec::with_capacity(records.len());
        for record in records {
            let mut opened = record.clone();
            match decrypt_record(&mut opened, &self.cipher) {
                Ok(()) => items.push(DecryptedItem {
                    record: opened,
                    decrypted: true,
                }),
                Err(e) => {
                    warn!(kind = %R::KIND, error = %e, "could not decrypt item");
                    items.push(DecryptedItem {
                        record,
                        decrypted: false,
                    });
                }
            }
        }
        Ok(items)
    }

    /// Seal a record and submit it as new; returns the server-assigned id.
    ///
    /// Sealing failures abort before anything is transmitted. On transport
    /// failure the sealed copy is discarded; the caller retries the whole
    /// operation, which re-seals under a fresh nonce.
    pub async fn create(&self, ctx: &AuthContext, mut record: R) -> Result<i64> {
        encrypt_record(&mut record, &self.cipher)?;
        let id = self.transport.create(ctx, &record).await?;
        debug!(kind = %R::KIND, id, "created record");
        Ok(id)
    }

    /// Seal a record and submit it as a replacement for its id.
    pub async fn update(&self, ctx: &AuthContext, mut record: R) -> Result<()> {
        encrypt_record(&mut record, &self.cipher)?;
        self.transport.update(ctx, &record).await?;
        debug!(kind = %R::KIND, "updated record");
        Ok(())
    }

    /// Delete a record by id. No cryptographic step; authorization and
    /// transport only.
    pub async fn delete(&self, ctx: &AuthContext, id: i64) -> Result<()> {
        self.transport.delete(ctx, id).await
    }

    /// Seal a record in place without submitting it.
    ///
    /// Used by flows that carry the sealed record elsewhere, such as the
    /// file upload path.
    pub fn encrypt_item(&self, record: &mut R) -> Result<()> {
        encrypt_record(record, &self.cipher)?;
        Ok(())
    }
}

impl<T> SecretService<FileRecord, T>
where
    T: RecordTransport<FileRecord>,
{
    /// Seal a whole file body under the session key.
    ///
    /// The body is one independent seal operation - a single
    /// `nonce || ciphertext || tag` bundle - separate from the record's
    /// field-by-field metadata sealing.
    pub async fn seal_file(&self, path: &Path) -> Result<Vec<u8>> {
        let plaintext = tokio::fs::read(path).await?;
        let sealed = self.cipher.seal(&plaintext)?;
        debug!(path = %path.display(), bytes = plaintext.len(), "sealed file body");
        Ok(sealed)
    }

    /// Open a sealed file body and write the plaintext to `dest`.
    pub async fn open_file(&self, sealed: &[u8], dest: &Path) -> Result<()> {
        let plaintext = self.cipher.open(sealed)?;
        tokio::fs::write(dest, &plaintext).await?;
        debug!(path = %dest.display(), bytes = plaintext.len(), "restored file body");
        Ok(())
    }
}
