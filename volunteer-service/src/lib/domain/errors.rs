use thiserror::Error;

/// Error for identifier parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for PhoneNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone number must be {min} to {max} characters, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Phone number may only contain digits, spaces and + - ( ) .")]
    InvalidCharacters,

    #[error("Phone number must contain at least {min} digits")]
    TooFewDigits { min: usize },
}

/// Error for required free-text fields (names, titles, locations)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("{field} is required")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Error for logged hours
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HoursError {
    #[error("Hours must be a non-negative number, got {0}")]
    Invalid(f64),
}

/// Error for enumerated fields such as statuses and priorities
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid {field} '{value}': expected one of {expected}")]
pub struct ChoiceError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}
