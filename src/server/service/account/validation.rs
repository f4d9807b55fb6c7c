//! Field rules for account registration and profile updates.
//!
//! Each function returns the value to store, which may differ from the input by normalisation.

use crate::server::{
    error::validation::ValidationError, service::account::password::PASSWORD_MAX_BYTES,
};

pub const USERNAME_MAX_LEN: usize = 50;
pub const PHONE_NUMBER_LEN: usize = 10;

pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::MissingField("username"));
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(ValidationError::FieldTooLong {
            field: "username",
            max: USERNAME_MAX_LEN,
        });
    }

    Ok(username.to_string())
}

/// Checks the address has a single `@` between non-empty parts and lowercases the domain.
pub fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(format!("{}@{}", local, domain.to_lowercase()))
}

pub fn validate_phone_number(phone_number: &str) -> Result<String, ValidationError> {
    let phone_number = phone_number.trim();
    if phone_number.is_empty() {
        return Err(ValidationError::MissingField("phone_number"));
    }
    if phone_number.len() != PHONE_NUMBER_LEN
        || !phone_number.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidPhoneNumber);
    }

    Ok(phone_number.to_string())
}

/// Rejects empty passwords and passwords bcrypt would silently truncate.
///
/// The limit is in bytes, not characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    if password.len() > PASSWORD_MAX_BYTES {
        return Err(ValidationError::FieldTooLong {
            field: "password",
            max: PASSWORD_MAX_BYTES,
        });
    }

    Ok(())
}
