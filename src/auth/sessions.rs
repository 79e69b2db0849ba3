//! Session token issuance and verification.
//!
//! Sessions are stateless, self-describing JWTs signed with a server-held
//! secret (HS256). `read` verifies signature and expiry and returns
//! `None` - not an error - on any failure, so callers cannot distinguish
//! expired, malformed, and tampered tokens. There is no server-side
//! revocation store; sign-out is the client discarding its token, and a
//! token remains valid until its natural expiry.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account id
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// A verified session, decoded from a presented token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The account this session was issued for
    pub subject: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Mints and verifies session tokens.
///
/// Holds the signing secret (read-only, loaded once at startup) and the
/// session lifetime. Construction is the only place configuration enters;
/// issue/read are pure CPU-bound operations.
#[derive(Clone)]
pub struct SessionIssuer {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl SessionIssuer {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    /// Issue a signed token for the given account.
    pub fn issue(&self, subject: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
    }

    /// Verify a presented token and decode the session it proves.
    ///
    /// Returns `None` for an expired, malformed, or tampered token. Expiry
    /// is checked with zero leeway.
    pub fn read(&self, token: &str) -> Option<Session> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .ok()?;

        Some(Session {
            subject: Uuid::parse_str(&data.claims.sub).ok()?,
            issued_at: DateTime::from_timestamp(data.claims.iat, 0)?,
            expires_at: DateTime::from_timestamp(data.claims.exp, 0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: i64 = 3600;

    fn issuer() -> SessionIssuer {
        SessionIssuer::new(*b"unit-test-signing-secret", TTL)
    }

    #[test]
    fn test_issue_then_read_returns_original_subject() {
        let issuer = issuer();
        let subject = Uuid::new_v4();

        let token = issuer.issue(subject).unwrap();
        let session = issuer.read(&token).unwrap();

        assert_eq!(session.subject, subject);
        assert_eq!(
            (session.expires_at - session.issued_at).num_seconds(),
            TTL
        );
    }

    #[test]
    fn test_expired_token_reads_as_absent() {
        // Negative lifetime: the token is already past expiry when minted
        let issuer = SessionIssuer::new(*b"unit-test-signing-secret", -3600);
        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(issuer.read(&token).is_none());
    }

    #[test]
    fn test_garbage_token_reads_as_absent() {
        assert!(issuer().read("not.a.token").is_none());
        assert!(issuer().read("").is_none());
    }

    #[test]
    fn test_token_signed_with_other_secret_reads_as_absent() {
        let token = issuer().issue(Uuid::new_v4()).unwrap();
        let other = SessionIssuer::new(*b"a-different-signing-secret!!", TTL);
        assert!(other.read(&token).is_none());
    }

    #[test]
    fn test_tampered_token_reads_as_absent() {
        let issuer = issuer();
        let token = issuer.issue(Uuid::new_v4()).unwrap();
        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);
        assert!(issuer.read(&tampered).is_none());
    }
}
