//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Username cannot contain whitespace")]
    WhitespaceInUsername,
}

const MAX_USERNAME_LENGTH: usize = 64;

/// Validate a username
///
/// Usernames are the user identifier: non-empty, at most 64 characters and
/// free of whitespace so they survive a round trip through a URL path.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    if username.chars().any(char::is_whitespace) {
        return Err(UserValidationError::WhitespaceInUsername);
    }

    Ok(())
}
