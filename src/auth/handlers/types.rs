//! Request and response types shared by the authentication handlers.

use serde::{Deserialize, Serialize};

use crate::auth::accounts::Account;
use crate::routes::DEFAULT_LOGIN_REDIRECT;

/// Sign-up request
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// Bare username or full organizational address
    pub identity: String,
    /// Raw secret; hashed before storage, never persisted as typed
    pub password: String,
    /// Optional display name
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Bare username or full organizational address
    pub identity: String,
    pub password: String,
}

/// Federated login request: the provider-verified identity, as delivered
/// by the identity-provider callback after its own consent flow.
#[derive(Debug, Serialize, Deserialize)]
pub struct FederatedSignInRequest {
    pub identity: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Display-name update for the current account
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
}

/// Account information safe to return to clients. Never carries the
/// password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    /// Canonical identity
    pub identity: String,
    pub display_name: Option<String>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            identity: account.canonical_identity,
            display_name: account.display_name,
        }
    }
}

/// Successful sign-up. Carries no token: sign-up does not authenticate,
/// the client logs in separately.
#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub account: AccountResponse,
}

/// Successful authentication: the session token, the account, and the
/// post-login redirect target for the UI.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub redirect_to: &'static str,
    pub account: AccountResponse,
}

impl SessionResponse {
    pub fn new(token: String, account: Account) -> Self {
        Self {
            token,
            redirect_to: DEFAULT_LOGIN_REDIRECT,
            account: account.into(),
        }
    }
}
