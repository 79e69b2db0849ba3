//! Application state.
//!
//! [`AppState`] is the central state container handed to the router. The
//! core holds no long-lived mutable shared state beyond what the account
//! store persists; everything here is cheap to clone per request.

use axum::extract::FromRef;

use crate::auth::service::AuthService;

#[derive(Clone)]
pub struct AppState {
    /// The authentication service shared across request handlers
    pub auth: AuthService,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

/// Lets handlers take `State<AuthService>` directly instead of the whole
/// `AppState`.
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
