//! Auth orchestration.
//!
//! [`AuthService`] composes the validator, normalizer, store, hasher, and
//! session issuer into the entry flows: sign-up, sign-in (local), and
//! sign-in (federated). Handlers stay thin; every invariant is enforced
//! here or below.

use uuid::Uuid;

use crate::auth::accounts::{Account, AccountStore, StoreError};
use crate::auth::sessions::{Session, SessionIssuer};
use crate::auth::{password, validation, AuthConfig};
use crate::error::AuthError;

/// The authentication service.
///
/// Cheap to clone; shared across request handlers via application state.
/// Holds no mutable state of its own - accounts live in the store, and the
/// signing secret is read-only after construction.
#[derive(Clone)]
pub struct AuthService {
    store: AccountStore,
    issuer: SessionIssuer,
    domain: String,
    bcrypt_cost: u32,
    password_min_len: usize,
}

impl AuthService {
    pub fn new(store: AccountStore, config: &AuthConfig) -> Self {
        Self {
            store,
            issuer: SessionIssuer::new(
                config.signing_secret.as_bytes(),
                config.session_ttl_secs,
            ),
            domain: config.domain.clone(),
            bcrypt_cost: config.bcrypt_cost,
            password_min_len: config.password_min_len,
        }
    }

    /// Register a new local-credential account.
    ///
    /// validate -> normalize -> check-not-exists -> hash -> create. The
    /// create is the single atomic mutation: on any failure no partial
    /// account state is left behind. Does not issue a session; the caller
    /// signs in separately.
    ///
    /// # Errors
    ///
    /// * [`AuthError::InvalidInput`] - validation failures, all fields
    /// * [`AuthError::DuplicateIdentity`] - identity already registered,
    ///   including when a concurrent sign-up won the race
    /// * [`AuthError::Internal`] - storage or hashing failure
    pub async fn sign_up(
        &self,
        identity: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<Account, AuthError> {
        let credentials =
            validation::validate(identity, password, &self.domain, self.password_min_len)
                .map_err(AuthError::InvalidInput)?;

        // Cheap pre-check; the unique constraint still closes the race.
        let existing = self
            .store
            .find_by_identity(&credentials.canonical_identity)
            .await
            .map_err(AuthError::internal)?;
        if existing.is_some() {
            tracing::warn!(
                identity = %credentials.canonical_identity,
                "sign-up for an already-registered identity"
            );
            return Err(AuthError::DuplicateIdentity);
        }

        let digest = password::hash_secret(&credentials.secret, self.bcrypt_cost)
            .map_err(AuthError::internal)?;

        let account = match self
            .store
            .create(&credentials.canonical_identity, Some(digest), display_name)
            .await
        {
            Ok(account) => account,
            Err(StoreError::Duplicate) => return Err(AuthError::DuplicateIdentity),
            Err(err) => return Err(AuthError::internal(err)),
        };

        tracing::info!(identity = %account.canonical_identity, "account created");
        Ok(account)
    }

    /// Authenticate a local credential and issue a session token.
    ///
    /// Unknown identity, wrong secret, malformed input, and a
    /// federated-only account (no stored hash) all produce the same
    /// [`AuthError::InvalidCredentials`], so responses cannot be used to
    /// enumerate accounts.
    pub async fn sign_in(
        &self,
        identity: &str,
        password: &str,
    ) -> Result<(String, Account), AuthError> {
        let Ok(credentials) =
            validation::validate(identity, password, &self.domain, self.password_min_len)
        else {
            return Err(AuthError::InvalidCredentials);
        };

        let account = self
            .store
            .find_by_identity(&credentials.canonical_identity)
            .await
            .map_err(AuthError::internal)?;
        let Some(account) = account else {
            tracing::warn!("sign-in for unknown identity");
            return Err(AuthError::InvalidCredentials);
        };

        // An absent hash verifies false, same as a wrong secret.
        if !password::verify_secret(&credentials.secret, account.password_hash.as_deref()) {
            tracing::warn!(identity = %account.canonical_identity, "sign-in with bad secret");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(account.id).map_err(AuthError::internal)?;
        tracing::info!(identity = %account.canonical_identity, "session issued");
        Ok((token, account))
    }

    /// Issue a session for a provider-verified identity.
    ///
    /// The identity proof already happened at the provider; this trusts
    /// the received address, looks up or just-in-time creates a
    /// passwordless local account, and issues a session. Never touches
    /// the password hasher.
    pub async fn sign_in_federated(
        &self,
        provider_identity: &str,
        display_name: Option<String>,
    ) -> Result<(String, Account), AuthError> {
        let canonical = provider_identity.trim().to_ascii_lowercase();
        if canonical.is_empty() || !canonical.contains('@') {
            // Contract violation by the provider integration, not the user
            return Err(AuthError::internal(format!(
                "federated identity is not an address: {canonical:?}"
            )));
        }

        let account = match self
            .store
            .find_by_identity(&canonical)
            .await
            .map_err(AuthError::internal)?
        {
            Some(account) => account,
            None => match self.store.create(&canonical, None, display_name).await {
                Ok(account) => {
                    tracing::info!(identity = %canonical, "federated account created");
                    account
                }
                // Lost a create race; the winner's account is ours too.
                Err(StoreError::Duplicate) => self
                    .store
                    .find_by_identity(&canonical)
                    .await
                    .map_err(AuthError::internal)?
                    .ok_or_else(|| {
                        AuthError::internal("account missing after duplicate create")
                    })?,
                Err(err) => return Err(AuthError::internal(err)),
            },
        };

        let token = self.issuer.issue(account.id).map_err(AuthError::internal)?;
        Ok((token, account))
    }

    /// Verify a presented token. Absent for expired/malformed/tampered
    /// tokens; callers must not distinguish these cases.
    pub fn current_session(&self, token: &str) -> Option<Session> {
        self.issuer.read(token)
    }

    /// Fetch the account behind a session subject
    pub async fn account(&self, id: Uuid) -> Result<Option<Account>, AuthError> {
        self.store.find_by_id(id).await.map_err(AuthError::internal)
    }

    /// Update an account's display name
    pub async fn update_display_name(
        &self,
        id: Uuid,
        display_name: Option<String>,
    ) -> Result<Account, AuthError> {
        self.store
            .set_display_name(id, display_name)
            .await
            .map_err(AuthError::internal)?
            // Session outlived the account; treat like any bad credential
            .ok_or(AuthError::InvalidCredentials)
    }
}
