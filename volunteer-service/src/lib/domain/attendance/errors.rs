use thiserror::Error;

use crate::domain::errors::ChoiceError;
use crate::domain::errors::HoursError;
use crate::domain::errors::IdError;

/// Top-level error for attendance operations
#[derive(Debug, Clone, Error)]
pub enum AttendanceError {
    #[error("Invalid ID: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid hours: {0}")]
    InvalidHours(#[from] HoursError),

    #[error("{0}")]
    InvalidChoice(#[from] ChoiceError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("At least one attendance record is required")]
    EmptyBatch,

    #[error("Volunteer not found: {0}")]
    VolunteerNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
