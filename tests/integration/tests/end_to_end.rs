//! End-to-end flows: client-side sealing through the server repository.

use tempfile::TempDir;

use keepsake_client::{ClientError, SecretService};
use keepsake_core::{AuthContext, CardRecord, MasterSecret, PasswordRecord};
use keepsake_crypto::{session_key, AeadCipher, KdfConfig};
use keepsake_integration_tests::{CardStoreTransport, PasswordStoreTransport};
use keepsake_server::{card_repository, connect, init_schema, password_repository, StoreConfig};
use sqlx::SqlitePool;

async fn test_pool(dir: &TempDir) -> SqlitePool {
    let path = dir.path().join("store.db");
    let config = StoreConfig {
        database_url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 4,
    };
    let pool = connect(&config).await.unwrap();
    init_schema(&pool).await.unwrap();
    pool
}

fn kdf_config() -> KdfConfig {
    // A modest iteration count keeps the suite quick; derivation semantics
    // do not depend on the count's magnitude.
    KdfConfig {
        iterations: 1_000,
        ..KdfConfig::default()
    }
}

fn cipher_for(master: &str) -> AeadCipher {
    let key = session_key(&MasterSecret::new(master), &kdf_config());
    AeadCipher::new(&key).unwrap()
}

#[tokio::test]
async fn test_password_lifecycle_against_store() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let ctx = AuthContext::new(1);

    let service = SecretService::new(
        PasswordStoreTransport {
            repo: password_repository(pool.clone()),
        },
        cipher_for("correct-horse"),
    );

    let record = PasswordRecord {
        id: 0,
        username: b"alice".to_vec(),
        password: b"s3cret".to_vec(),
        domain: "example.com".to_string(),
        comment: "staging account".to_string(),
    };
    let id = service.create(&ctx, record).await.unwrap();

    // What landed in the database must be ciphertext, not the plaintext.
    let raw = password_repository(pool.clone())
        .get_by_owner_and_id(&ctx, id)
        .await
        .unwrap();
    assert_ne!(raw.username, b"alice");
    assert_ne!(raw.password, b"s3cret");
    assert_eq!(raw.domain, "example.com");

    // Fetching through the service under the same master secret restores
    // the original fields.
    let items = service.get_all(&ctx).await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].decrypted);
    assert_eq!(items[0].record.username, b"alice");
    assert_eq!(items[0].record.password, b"s3cret");
    assert_eq!(items[0].record.comment, "staging account");

    // A session derived from the wrong master secret cannot open the item;
    // the listing still returns it, flagged.
    let wrong_session = SecretService::new(
        PasswordStoreTransport {
            repo: password_repository(pool.clone()),
        },
        cipher_for("wrong-password"),
    );
    let items = wrong_session.get_all(&ctx).await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(!items[0].decrypted);
}

#[tokio::test]
async fn test_update_reseals_through_store() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let ctx = AuthContext::new(1);

    let service = SecretService::new(
        PasswordStoreTransport {
            repo: password_repository(pool.clone()),
        },
        cipher_for("correct-horse"),
    );

    let record = PasswordRecord {
        id: 0,
        username: b"alice".to_vec(),
        password: b"s3cret".to_vec(),
        domain: "example.com".to_string(),
        comment: "before".to_string(),
    };
    let id = service.create(&ctx, record).await.unwrap();

    let rotated = PasswordRecord {
        id,
        username: b"alice".to_vec(),
        password: b"rotated".to_vec(),
        domain: "example.com".to_string(),
        comment: "after".to_string(),
    };
    service.update(&ctx, rotated).await.unwrap();

    let items = service.get_all(&ctx).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].record.password, b"rotated");
    assert_eq!(items[0].record.comment, "after");
}

#[tokio::test]
async fn test_card_optional_fields_end_to_end() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let ctx = AuthContext::new(1);

    let service = SecretService::new(
        CardStoreTransport {
            repo: card_repository(pool.clone()),
        },
        cipher_for("correct-horse"),
    );

    // Number and cvv only; date and holder were never filled in.
    let card = CardRecord {
        id: 0,
        number: b"4111111111111111".to_vec(),
        date: Vec::new(),
        holder: Vec::new(),
        cvv: b"123".to_vec(),
        comment: String::new(),
    };
    let id = service.create(&ctx, card).await.unwrap();

    // The store sees sealed number/cvv and genuinely empty optional blobs.
    let raw = card_repository(pool.clone())
        .get_by_owner_and_id(&ctx, id)
        .await
        .unwrap();
    assert_ne!(raw.number, b"4111111111111111");
    assert!(!raw.cvv.is_empty());
    assert!(raw.date.is_empty());
    assert!(raw.holder.is_empty());

    let items = service.get_all(&ctx).await.unwrap();
    assert!(items[0].decrypted);
    assert_eq!(items[0].record.number, b"4111111111111111");
    assert_eq!(items[0].record.cvv, b"123");
    assert!(items[0].record.date.is_empty());
    assert!(items[0].record.holder.is_empty());
}

#[tokio::test]
async fn test_tenant_isolation_end_to_end() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;

    let alice = AuthContext::new(1);
    let bob = AuthContext::new(2);

    let service = SecretService::new(
        PasswordStoreTransport {
            repo: password_repository(pool.clone()),
        },
        cipher_for("correct-horse"),
    );

    let record = PasswordRecord {
        id: 0,
        username: b"alice".to_vec(),
        password: b"s3cret".to_vec(),
        domain: "example.com".to_string(),
        comment: String::new(),
    };
    let id = service.create(&alice, record).await.unwrap();

    // Bob's listing is empty, and Bob cannot delete Alice's record even
    // with its id in hand.
    assert!(service.get_all(&bob).await.unwrap().is_empty());
    let result = service.delete(&bob, id).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));

    // Alice's record survives the attempt.
    let items = service.get_all(&alice).await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].decrypted);
}

#[tokio::test]
async fn test_delete_end_to_end() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let ctx = AuthContext::new(1);

    let service = SecretService::new(
        PasswordStoreTransport {
            repo: password_repository(pool.clone()),
        },
        cipher_for("correct-horse"),
    );

    let record = PasswordRecord {
        id: 0,
        username: b"alice".to_vec(),
        password: b"s3cret".to_vec(),
        domain: "example.com".to_string(),
        comment: String::new(),
    };
    let id = service.create(&ctx, record).await.unwrap();

    service.delete(&ctx, id).await.unwrap();
    assert!(service.get_all(&ctx).await.unwrap().is_empty());

    let result = service.delete(&ctx, id).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}
