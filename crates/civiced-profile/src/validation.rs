//! Registration and sign-in validation
//!
//! Rules:
//! - name, email, county: non-empty after trimming
//! - password: at least 6 characters (no other checks; credentials are
//!   not verified against anything server-side)
//! - age: at least 10

use thiserror::Error;

use crate::Result;

/// Minimum password length accepted at registration and sign-in.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum learner age accepted at registration.
pub const MIN_AGE: u32 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    #[error("County cannot be empty")]
    EmptyCounty,

    #[error("Learners must be at least {} years old", MIN_AGE)]
    UnderMinimumAge,
}

/// Validate registration input. Checks run in field order; the first
/// failing rule is returned.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    county: &str,
    age: u32,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if county.trim().is_empty() {
        return Err(ValidationError::EmptyCounty);
    }
    if age < MIN_AGE {
        return Err(ValidationError::UnderMinimumAge);
    }
    Ok(())
}

/// Validate sign-in input. Only presence and password length are checked.
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
