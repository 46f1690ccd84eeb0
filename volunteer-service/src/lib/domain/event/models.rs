use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::ChoiceError;
use crate::domain::values::uuid_id;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::models::VolunteerId;

uuid_id!(
    /// Event unique identifier type
    EventId
);

/// Volunteer event aggregate entity.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub name: RequiredText,
    pub date: DateTime<Utc>,
    pub location: RequiredText,
    pub description: Option<String>,
    pub required_volunteers: u32,
    pub assigned_volunteers: Vec<VolunteerId>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub const DEFAULT_REQUIRED_VOLUNTEERS: u32 = 10;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

impl FromStr for EventStatus {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            other => Err(ChoiceError {
                field: "status",
                value: other.to_string(),
                expected: "upcoming, ongoing, completed",
            }),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to schedule a new event
#[derive(Debug)]
pub struct CreateEventCommand {
    pub name: RequiredText,
    pub date: DateTime<Utc>,
    pub location: RequiredText,
    pub description: Option<String>,
    pub required_volunteers: Option<u32>,
    pub assigned_volunteers: Vec<VolunteerId>,
    pub status: EventStatus,
}

/// Partial update of an event; `None` leaves the field unchanged.
#[derive(Debug, Default)]
pub struct UpdateEventCommand {
    pub name: Option<RequiredText>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<RequiredText>,
    pub description: Option<String>,
    pub required_volunteers: Option<u32>,
    pub assigned_volunteers: Option<Vec<VolunteerId>>,
    pub status: Option<EventStatus>,
}
