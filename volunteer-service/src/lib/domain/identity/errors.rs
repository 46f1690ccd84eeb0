use thiserror::Error;

use crate::domain::errors::EmailError;
use crate::domain::errors::TextError;

/// Top-level error for signup, login and token refresh
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] TextError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password is required")]
    MissingPassword,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<crate::domain::volunteer::errors::VolunteerError> for IdentityError {
    fn from(err: crate::domain::volunteer::errors::VolunteerError) -> Self {
        use crate::domain::volunteer::errors::VolunteerError;

        match err {
            VolunteerError::DatabaseError(msg) => IdentityError::DatabaseError(msg),
            other => IdentityError::Unknown(other.to_string()),
        }
    }
}
