use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::ChoiceError;
use crate::domain::event::models::EventId;
use crate::domain::values::uuid_id;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::models::VolunteerId;

uuid_id!(
    /// Task unique identifier type
    TaskId
);

/// A unit of work assigned to one volunteer for one event.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub event_id: EventId,
    pub volunteer_id: VolunteerId,
    pub title: RequiredText,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(ChoiceError {
                field: "status",
                value: other.to_string(),
                expected: "pending, in-progress, completed",
            }),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(ChoiceError {
                field: "priority",
                value: other.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to assign a new task
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub event_id: EventId,
    pub volunteer_id: VolunteerId,
    pub title: RequiredText,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update of a task; `None` leaves the field unchanged.
#[derive(Debug, Default)]
pub struct UpdateTaskCommand {
    pub volunteer_id: Option<VolunteerId>,
    pub title: Option<RequiredText>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_hyphenated_wire_form() {
        assert_eq!("in-progress".parse(), Ok(TaskStatus::InProgress));
        assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
        assert!("in_progress".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_priority_default_and_parse() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
        assert_eq!("high".parse(), Ok(TaskPriority::High));

        let err = "urgent".parse::<TaskPriority>().unwrap_err();
        assert_eq!(err.field, "priority");
    }
}
