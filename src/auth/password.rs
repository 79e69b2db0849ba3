//! Password hashing and verification.
//!
//! Thin wrappers around bcrypt. The salt is generated per call and embedded
//! in the output digest; comparison inside `bcrypt::verify` is constant
//! time. The cost factor is a configuration value, not a hard-coded library
//! default, so deployments can tune hashing to tens of milliseconds on
//! their hardware.

pub use bcrypt::DEFAULT_COST;

/// Hash a secret with a fresh random salt.
///
/// Never fails for well-formed input; an error here means the cost factor
/// is out of bcrypt's accepted range and is an infrastructure problem.
pub fn hash_secret(secret: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(secret, cost)
}

/// Verify a secret against a stored digest.
///
/// Returns `false` - never an error - for a mismatched secret, a malformed
/// digest, or a missing digest (federated-only accounts). Callers must
/// treat "no password set" identically to "wrong password" so neither the
/// error shape nor the response reveals account type or existence.
pub fn verify_secret(secret: &str, digest: Option<&str>) -> bool {
    match digest {
        Some(digest) => bcrypt::verify(secret, digest).unwrap_or(false),
        None => false,
    }
}
