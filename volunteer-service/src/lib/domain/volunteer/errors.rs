use thiserror::Error;

use crate::domain::errors::ChoiceError;
use crate::domain::errors::EmailError;
use crate::domain::errors::HoursError;
use crate::domain::errors::IdError;
use crate::domain::errors::PhoneError;
use crate::domain::errors::TextError;

/// Top-level error for all volunteer-related operations
#[derive(Debug, Clone, Error)]
pub enum VolunteerError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid volunteer ID: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid field: {0}")]
    InvalidText(#[from] TextError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    #[error("Invalid hours: {0}")]
    InvalidHours(#[from] HoursError),

    #[error("{0}")]
    InvalidChoice(#[from] ChoiceError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Password is required")]
    MissingPassword,

    // Domain-level errors
    #[error("Volunteer not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
