use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::ChoiceError;
use crate::domain::event::models::EventId;
use crate::domain::values::uuid_id;
use crate::domain::values::Hours;
use crate::domain::volunteer::models::VolunteerId;

uuid_id!(
    /// Attendance record unique identifier type
    AttendanceId
);

/// One volunteer's attendance at one event on a given date.
#[derive(Debug, Clone)]
pub struct Attendance {
    pub id: AttendanceId,
    pub volunteer_id: VolunteerId,
    pub event_id: EventId,
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
    pub hours: Hours,
    pub created_at: DateTime<Utc>,
}

impl Attendance {
    /// Hours added to the volunteer's running total when this record is stored.
    ///
    /// Absences credit nothing regardless of the hours recorded.
    pub fn credited_hours(&self) -> Hours {
        match self.status {
            AttendanceStatus::Present => self.hours,
            AttendanceStatus::Absent => Hours::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            other => Err(ChoiceError {
                field: "status",
                value: other.to_string(),
                expected: "present, absent",
            }),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a bulk attendance submission
#[derive(Debug, Clone)]
pub struct RecordAttendanceCommand {
    pub volunteer_id: VolunteerId,
    pub event_id: EventId,
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
    pub hours: Hours,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: AttendanceStatus, hours: f64) -> Attendance {
        let now = Utc::now();
        Attendance {
            id: AttendanceId::new(),
            volunteer_id: VolunteerId::new(),
            event_id: EventId::new(),
            date: now,
            status,
            hours: Hours::new(hours).unwrap(),
            created_at: now,
        }
    }

    #[test]
    fn test_credited_hours() {
        assert_eq!(record(AttendanceStatus::Present, 3.5).credited_hours().value(), 3.5);
        assert_eq!(record(AttendanceStatus::Absent, 3.5).credited_hours(), Hours::ZERO);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("present".parse(), Ok(AttendanceStatus::Present));
        assert!("late".parse::<AttendanceStatus>().is_err());
    }
}
