//! Credential validation.
//!
//! Pure, side-effect-free schema checks on raw sign-in/sign-up input,
//! run before any database access. Every failed field is reported, not
//! just the first, so the caller can render all problems at once.

use crate::auth::identity;
use crate::error::FieldError;

/// Validated credential input, ready for storage lookup or creation.
///
/// Constructed per request and discarded once the flow completes; the
/// secret is never persisted or logged in this form.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Canonical address form produced by the normalizer
    pub canonical_identity: String,
    /// The raw secret, pending hashing or verification
    pub secret: String,
}

/// Validate a raw `{identity, secret}` pair and normalize the identity.
///
/// # Arguments
///
/// * `identity` - bare username or full address, as typed by the caller
/// * `password` - the raw secret
/// * `domain` - organizational domain suffix for normalization
/// * `password_min_len` - minimum accepted secret length
///
/// # Errors
///
/// Returns every failed field check. An identity error and a password
/// error for the same input produce two entries.
pub fn validate(
    identity: &str,
    password: &str,
    domain: &str,
    password_min_len: usize,
) -> Result<Credentials, Vec<FieldError>> {
    let mut errors = Vec::new();

    let canonical = match identity::normalize(identity, domain) {
        Ok(canonical) => Some(canonical),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    if password.chars().count() < password_min_len {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {password_min_len} characters long"),
        ));
    }

    match canonical {
        Some(canonical_identity) if errors.is_empty() => Ok(Credentials {
            canonical_identity,
            secret: password.to_string(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOMAIN: &str = "example.org";
    const MIN_LEN: usize = 8;

    #[test]
    fn test_valid_input_yields_canonical_credentials() {
        let creds = validate("ali", "password1", DOMAIN, MIN_LEN).unwrap();
        assert_eq!(creds.canonical_identity, "ali@example.org");
        assert_eq!(creds.secret, "password1");
    }

    #[test]
    fn test_short_password_is_rejected() {
        let errors = validate("ali", "short", DOMAIN, MIN_LEN).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn test_all_failed_fields_are_reported() {
        let errors = validate("a!", "short", DOMAIN, MIN_LEN).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["identity", "password"]);
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        // 8 multi-byte characters must pass an 8-character minimum
        assert!(validate("ali", "pässwörd", DOMAIN, MIN_LEN).is_ok());
    }

    #[test]
    fn test_min_length_is_configurable() {
        assert!(validate("ali", "password1", DOMAIN, 12).is_err());
        assert!(validate("ali", "password-and-more", DOMAIN, 12).is_ok());
    }
}
