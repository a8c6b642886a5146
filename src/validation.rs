//! Input validation for registration data.
//!
//! The GraphQL layer applies the same limits declaratively on `RegisterInput`;
//! these functions back that layer and any caller that reaches the users
//! service without going through GraphQL. Email syntax is checked with the
//! same validator `#[graphql(validator(email))]` uses.

use crate::error::{Result, SignupError};

/// Maximum allowed length for a display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum allowed length for an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum allowed length for a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum allowed length for a password.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validates a display name.
pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SignupError::Validation("Name cannot be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(SignupError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates an email address.
pub fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(SignupError::Validation("Email cannot be empty".to_string()));
    }
    if trimmed.len() > MAX_EMAIL_LENGTH {
        return Err(SignupError::Validation(format!(
            "Email exceeds maximum length of {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    if async_graphql::validators::email(&trimmed.to_string()).is_err() {
        return Err(SignupError::Validation(format!(
            "'{}' is not a valid email address",
            trimmed
        )));
    }
    Ok(())
}

/// Validates a plaintext password. Only length is checked here.
pub fn validate_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(SignupError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(SignupError::Validation(format!(
            "Password exceeds maximum length of {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Validates a phone number.
pub fn validate_phone_number(phone_number: i64) -> Result<()> {
    if phone_number <= 0 {
        return Err(SignupError::Validation(
            "Phone number must be a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Normalizes an email for uniqueness checks.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
