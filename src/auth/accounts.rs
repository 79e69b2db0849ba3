//! Account records and storage.
//!
//! The store is the only component permitted to mutate persisted account
//! state. Uniqueness of the canonical identity is enforced at the storage
//! layer - a UNIQUE index for PostgreSQL, a single-lock check-and-insert
//! for the in-memory backend - so that exactly one of any number of
//! concurrent creates for the same identity can succeed.
//!
//! The in-memory backend exists for local development without a database
//! (the server falls back to it when `DATABASE_URL` is unset) and for
//! tests; it honors the same contract.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// A persisted account.
///
/// `canonical_identity` is unique and immutable once set. `password_hash`
/// is absent for federated-only accounts, which can therefore only
/// authenticate via federated login.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Opaque unique identifier, assigned at creation
    pub id: Uuid,
    /// Canonical address form, unique across all accounts
    pub canonical_identity: String,
    /// bcrypt digest; `None` for federated-only accounts. Never serialized
    /// into responses.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    /// Optional display name, mutable
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage-layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The canonical identity is already registered
    #[error("identity already registered")]
    Duplicate,
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

const ACCOUNT_COLUMNS: &str =
    "id, canonical_identity, password_hash, display_name, created_at, updated_at";

/// Account storage backend
#[derive(Clone)]
pub enum AccountStore {
    /// PostgreSQL-backed store; the production configuration
    Postgres(PgPool),
    /// Mutex-guarded map; development fallback and test double
    Memory(MemoryAccounts),
}

#[derive(Clone, Default)]
pub struct MemoryAccounts {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
}

impl AccountStore {
    pub fn postgres(pool: PgPool) -> Self {
        Self::Postgres(pool)
    }

    pub fn in_memory() -> Self {
        Self::Memory(MemoryAccounts::default())
    }

    /// Look up an account by canonical identity
    pub async fn find_by_identity(&self, identity: &str) -> Result<Option<Account>, StoreError> {
        match self {
            Self::Postgres(pool) => {
                let account = sqlx::query_as::<_, Account>(&format!(
                    "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE canonical_identity = $1"
                ))
                .bind(identity)
                .fetch_optional(pool)
                .await?;
                Ok(account)
            }
            Self::Memory(store) => Ok(store.lock().get(identity).cloned()),
        }
    }

    /// Look up an account by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        match self {
            Self::Postgres(pool) => {
                let account = sqlx::query_as::<_, Account>(&format!(
                    "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
                ))
                .bind(id)
                .fetch_optional(pool)
                .await?;
                Ok(account)
            }
            Self::Memory(store) => Ok(store
                .lock()
                .values()
                .find(|account| account.id == id)
                .cloned()),
        }
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// [`StoreError::Duplicate`] when the identity is already registered,
    /// including when a concurrent create for the same identity won the
    /// race. The existing account is left untouched.
    pub async fn create(
        &self,
        canonical_identity: &str,
        password_hash: Option<String>,
        display_name: Option<String>,
    ) -> Result<Account, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        match self {
            Self::Postgres(pool) => {
                sqlx::query_as::<_, Account>(&format!(
                    "INSERT INTO accounts ({ACCOUNT_COLUMNS}) \
                     VALUES ($1, $2, $3, $4, $5, $6) \
                     RETURNING {ACCOUNT_COLUMNS}"
                ))
                .bind(id)
                .bind(canonical_identity)
                .bind(&password_hash)
                .bind(&display_name)
                .bind(now)
                .bind(now)
                .fetch_one(pool)
                .await
                .map_err(|err| {
                    if is_unique_violation(&err) {
                        StoreError::Duplicate
                    } else {
                        StoreError::Database(err)
                    }
                })
            }
            Self::Memory(store) => {
                let mut accounts = store.lock();
                if accounts.contains_key(canonical_identity) {
                    return Err(StoreError::Duplicate);
                }
                let account = Account {
                    id,
                    canonical_identity: canonical_identity.to_string(),
                    password_hash,
                    display_name,
                    created_at: now,
                    updated_at: now,
                };
                accounts.insert(canonical_identity.to_string(), account.clone());
                Ok(account)
            }
        }
    }

    /// Update an account's display name. Returns the updated account, or
    /// `None` if the account no longer exists.
    pub async fn set_display_name(
        &self,
        id: Uuid,
        display_name: Option<String>,
    ) -> Result<Option<Account>, StoreError> {
        let now = Utc::now();

        match self {
            Self::Postgres(pool) => {
                let account = sqlx::query_as::<_, Account>(&format!(
                    "UPDATE accounts SET display_name = $1, updated_at = $2 \
                     WHERE id = $3 RETURNING {ACCOUNT_COLUMNS}"
                ))
                .bind(&display_name)
                .bind(now)
                .bind(id)
                .fetch_optional(pool)
                .await?;
                Ok(account)
            }
            Self::Memory(store) => {
                let mut accounts = store.lock();
                let account = accounts.values_mut().find(|account| account.id == id);
                Ok(account.map(|account| {
                    account.display_name = display_name;
                    account.updated_at = now;
                    account.clone()
                }))
            }
        }
    }
}

impl MemoryAccounts {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Account>> {
        self.accounts.lock().unwrap()
    }
}

/// SQLSTATE 23505: unique_violation
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const IDENTITY: &str = "bob@example.org";

    #[tokio::test]
    async fn test_create_then_find_by_identity() {
        let store = AccountStore::in_memory();
        let created = store
            .create(IDENTITY, Some("digest".to_string()), None)
            .await
            .unwrap();

        let found = store.find_by_identity(IDENTITY).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.canonical_identity, IDENTITY);
    }

    #[tokio::test]
    async fn test_find_missing_identity_is_absent_not_error() {
        let store = AccountStore::in_memory();
        assert!(store.find_by_identity(IDENTITY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_is_rejected_and_leaves_original_intact() {
        let store = AccountStore::in_memory();
        store
            .create(IDENTITY, Some("original".to_string()), None)
            .await
            .unwrap();

        let result = store.create(IDENTITY, Some("attacker".to_string()), None).await;
        assert_matches!(result, Err(StoreError::Duplicate));

        let account = store.find_by_identity(IDENTITY).await.unwrap().unwrap();
        assert_eq!(account.password_hash.as_deref(), Some("original"));
    }

    #[tokio::test]
    async fn test_concurrent_creates_have_exactly_one_winner() {
        let store = AccountStore::in_memory();
        let (a, b) = tokio::join!(
            store.create(IDENTITY, Some("first".to_string()), None),
            store.create(IDENTITY, Some("second".to_string()), None),
        );

        let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        assert!(matches!(a, Err(StoreError::Duplicate)) || matches!(b, Err(StoreError::Duplicate)));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = AccountStore::in_memory();
        let created = store.create(IDENTITY, None, None).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.canonical_identity, IDENTITY);
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_display_name() {
        let store = AccountStore::in_memory();
        let created = store.create(IDENTITY, None, None).await.unwrap();

        let updated = store
            .set_display_name(created.id, Some("Bob".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.display_name.as_deref(), Some("Bob"));

        let missing = store
            .set_display_name(Uuid::new_v4(), Some("Nobody".to_string()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let account = Account {
            id: Uuid::new_v4(),
            canonical_identity: IDENTITY.to_string(),
            password_hash: Some("digest".to_string()),
            display_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("digest"));
        assert!(!json.contains("password_hash"));
    }
}
