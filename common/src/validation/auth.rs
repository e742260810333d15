use thiserror::Error;

use crate::api::Credentials;

pub const USERNAME_MIN_CHARS: usize = 2;
pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MIN_CHARS: usize = 4;

pub const USERNAME_REQUIRED: &str = "Please enter a username";
pub const USERNAME_LENGTH: &str = "Username must be 2-20 characters";
pub const PASSWORD_REQUIRED: &str = "Please enter a password";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 4 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthField {
    Username,
    Password,
    Confirm,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: AuthField,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: AuthField, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Inputs are trimmed; the trimmed values are what gets sent.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() {
        return Err(ValidationError::new(AuthField::Username, USERNAME_REQUIRED));
    }
    if password.is_empty() {
        return Err(ValidationError::new(AuthField::Password, PASSWORD_REQUIRED));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Checks fields in form order and stops at the first failure. Lengths count
/// characters, not bytes.
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    let password = password.trim();
    let confirm = confirm.trim();

    if username.is_empty() {
        return Err(ValidationError::new(AuthField::Username, USERNAME_REQUIRED));
    }
    let username_chars = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&username_chars) {
        return Err(ValidationError::new(AuthField::Username, USERNAME_LENGTH));
    }
    if password.is_empty() {
        return Err(ValidationError::new(AuthField::Password, PASSWORD_REQUIRED));
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ValidationError::new(AuthField::Password, PASSWORD_TOO_SHORT));
    }
    if password != confirm {
        return Err(ValidationError::new(AuthField::Confirm, PASSWORDS_DIFFER));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
