//! Identity normalization.
//!
//! The login boundary accepts either a short username or a full
//! organizational address interchangeably; the system of record always
//! stores the canonical address form `local@domain`. Canonical identities
//! are lowercase - case policy is fixed here and nowhere else.

use crate::error::FieldError;

/// Minimum length for a bare username
pub const USERNAME_MIN_LEN: usize = 3;

/// Maximum length for a bare username
pub const USERNAME_MAX_LEN: usize = 30;

/// Normalize a user-supplied identity into its canonical address form.
///
/// Two branches:
///
/// - input containing `@` is treated as a full address and must end with
///   `@<domain>`; anything else is rejected, never silently coerced
/// - input without `@` is treated as a bare username, checked against the
///   allowed character set and length range, and suffixed with `@<domain>`
///
/// # Errors
///
/// Returns a [`FieldError`] on the `identity` field describing the first
/// rule the input broke.
pub fn normalize(raw: &str, domain: &str) -> Result<String, FieldError> {
    let identity = raw.trim().to_ascii_lowercase();

    if identity.is_empty() {
        return Err(FieldError::new(
            "identity",
            "Email or username is required",
        ));
    }

    match identity.split_once('@') {
        Some((local, host)) => normalize_address(&identity, local, host, domain),
        None => normalize_username(&identity, domain),
    }
}

fn normalize_address(
    address: &str,
    local: &str,
    host: &str,
    domain: &str,
) -> Result<String, FieldError> {
    if local.is_empty() || host.contains('@') || address.chars().any(char::is_whitespace) {
        return Err(FieldError::new("identity", "Invalid email format"));
    }
    if host != domain {
        return Err(FieldError::new(
            "identity",
            format!("Email must end with @{domain}"),
        ));
    }

    Ok(address.to_string())
}

fn normalize_username(username: &str, domain: &str) -> Result<String, FieldError> {
    if username.len() < USERNAME_MIN_LEN || username.len() > USERNAME_MAX_LEN {
        return Err(FieldError::new(
            "identity",
            format!("Username must be {USERNAME_MIN_LEN}-{USERNAME_MAX_LEN} characters long"),
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(FieldError::new(
            "identity",
            "Username can only contain letters, numbers, underscores, and hyphens",
        ));
    }

    Ok(format!("{username}@{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOMAIN: &str = "example.org";

    #[test]
    fn test_bare_username_gets_domain_appended() {
        assert_eq!(normalize("ali", DOMAIN).unwrap(), "ali@example.org");
        assert_eq!(
            normalize("user_name-01", DOMAIN).unwrap(),
            "user_name-01@example.org"
        );
    }

    #[test]
    fn test_full_address_with_matching_domain_passes_through() {
        assert_eq!(
            normalize("ali@example.org", DOMAIN).unwrap(),
            "ali@example.org"
        );
    }

    #[test]
    fn test_canonical_form_is_lowercase() {
        assert_eq!(normalize("Ali", DOMAIN).unwrap(), "ali@example.org");
        assert_eq!(
            normalize("ALI@EXAMPLE.ORG", DOMAIN).unwrap(),
            "ali@example.org"
        );
    }

    #[test]
    fn test_foreign_domain_is_rejected_not_coerced() {
        let err = normalize("ali@elsewhere.net", DOMAIN).unwrap_err();
        assert_eq!(err.field, "identity");
        assert_eq!(err.message, "Email must end with @example.org");
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        assert!(normalize("@example.org", DOMAIN).is_err());
        assert!(normalize("a@b@example.org", DOMAIN).is_err());
        assert!(normalize("a b@example.org", DOMAIN).is_err());
    }

    #[test]
    fn test_username_length_range() {
        assert!(normalize("ab", DOMAIN).is_err());
        assert!(normalize(&"a".repeat(31), DOMAIN).is_err());
        assert!(normalize("abc", DOMAIN).is_ok());
        assert!(normalize(&"a".repeat(30), DOMAIN).is_ok());
    }

    #[test]
    fn test_username_character_set() {
        assert!(normalize("ali!", DOMAIN).is_err());
        assert!(normalize("a li", DOMAIN).is_err());
        assert!(normalize("ali.b", DOMAIN).is_err());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = normalize("   ", DOMAIN).unwrap_err();
        assert_eq!(err.message, "Email or username is required");
    }
}
