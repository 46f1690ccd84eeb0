use thiserror::Error;

use crate::domain::errors::ChoiceError;
use crate::domain::errors::IdError;
use crate::domain::errors::TextError;

/// Top-level error for all task-related operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("Invalid ID: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid field: {0}")]
    InvalidText(#[from] TextError),

    #[error("{0}")]
    InvalidChoice(#[from] ChoiceError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Volunteer not found: {0}")]
    VolunteerNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
