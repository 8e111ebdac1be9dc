//! Input validation for user-entered fields.
//!
//! Validation runs in the presentation layer before any store mutation;
//! nothing invalid ever enters the store, and the store itself does not
//! validate.

use crate::error::Result;
use crate::Error;

/// Validate the required fields of a new or edited user.
pub fn validate_new_user(name: &str, email: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::MissingRequiredField("name"));
    }
    validate_email(email)
}

/// Check that an email has the shape `local@domain.tld`.
///
/// Accepts exactly one `@` with a non-empty local part, no whitespace
/// anywhere, and a dot inside the domain that is neither its first nor its
/// last character.
pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(Error::MissingRequiredField("email"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(Error::InvalidEmail(email.to_string()));
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(Error::InvalidEmail(email.to_string())),
    };

    let domain_ok = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || !domain_ok {
        return Err(Error::InvalidEmail(email.to_string()));
    }

    Ok(())
}
