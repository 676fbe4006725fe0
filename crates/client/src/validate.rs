//! Input validation for registration arguments.
//!
//! The server only checks that the fields are present, so obviously
//! malformed input is caught here before a request is made.

use crate::error::{ClientError, Result};

/// Validates an attendee name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ClientError::InvalidInput(
            "Name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates an attendee email address.
///
/// Only a shape check: one `@` with a non-empty local part and a domain
/// containing a dot.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ClientError::InvalidInput(format!(
            "Invalid email address: {email}"
        )));
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(ClientError::InvalidInput(format!(
            "Invalid email address: {email}"
        )));
    }

    Ok(())
}
