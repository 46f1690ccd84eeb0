//! JSON shapes shared by the HTTP handlers.
//!
//! Records go out in camelCase with the identifier under `_id`. Password
//! hashes never appear here.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::TimeZone;
use chrono::Utc;
use serde::Serialize;

use crate::domain::attendance::models::Attendance;
use crate::domain::event::models::Event;
use crate::domain::identity::models::Admin;
use crate::domain::task::models::Task;
use crate::domain::volunteer::models::Volunteer;

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
        .ok_or_else(|| format!("'{}' is not an RFC 3339 timestamp or YYYY-MM-DD date", raw))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminData {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<&Admin> for AdminData {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            name: admin.name.to_string(),
            email: admin.email.to_string(),
            role: auth::Role::Admin.as_str(),
            created_at: admin.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerData {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub hours: f64,
    pub status: &'static str,
    pub join_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Volunteer> for VolunteerData {
    fn from(volunteer: &Volunteer) -> Self {
        Self {
            id: volunteer.id.to_string(),
            name: volunteer.name.to_string(),
            email: volunteer.email.to_string(),
            phone: volunteer.phone.as_str().to_string(),
            address: volunteer.address.clone(),
            skills: volunteer.skills.clone(),
            hours: volunteer.hours.value(),
            status: volunteer.status.as_str(),
            join_date: volunteer.join_date,
            created_at: volunteer.created_at,
            updated_at: volunteer.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: Option<String>,
    pub required_volunteers: u32,
    pub assigned_volunteers: Vec<String>,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventData {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.to_string(),
            date: event.date,
            location: event.location.to_string(),
            description: event.description.clone(),
            required_volunteers: event.required_volunteers,
            assigned_volunteers: event
                .assigned_volunteers
                .iter()
                .map(ToString::to_string)
                .collect(),
            status: event.status.as_str(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    #[serde(rename = "_id")]
    pub id: String,
    pub event_id: String,
    pub volunteer_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: &'static str,
    pub priority: &'static str,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            event_id: task.event_id.to_string(),
            volunteer_id: task.volunteer_id.to_string(),
            title: task.title.to_string(),
            description: task.description.clone(),
            status: task.status.as_str(),
            priority: task.priority.as_str(),
            due_date: task.due_date,
            assigned_date: task.assigned_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceData {
    #[serde(rename = "_id")]
    pub id: String,
    pub volunteer_id: String,
    pub event_id: String,
    pub date: DateTime<Utc>,
    pub status: &'static str,
    pub hours: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Attendance> for AttendanceData {
    fn from(record: &Attendance) -> Self {
        Self {
            id: record.id.to_string(),
            volunteer_id: record.volunteer_id.to_string(),
            event_id: record.event_id.to_string(),
            date: record.date,
            status: record.status.as_str(),
            hours: record.hours.value(),
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;
    use crate::domain::values::EmailAddress;
    use crate::domain::values::Hours;
    use crate::domain::values::PhoneNumber;
    use crate::domain::values::RequiredText;
    use crate::domain::volunteer::models::VolunteerId;
    use crate::domain::volunteer::models::VolunteerStatus;

    #[test]
    fn test_parse_date_accepts_both_forms() {
        let plain = parse_date("2026-11-01").unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap());

        let stamped = parse_date("2026-11-01T09:30:00+02:00").unwrap();
        assert_eq!(stamped.hour(), 7);
        assert_eq!(stamped.minute(), 30);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("next tuesday").is_err());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_volunteer_json_shape() {
        let now = Utc::now();
        let volunteer = Volunteer {
            id: VolunteerId::new(),
            name: RequiredText::new("name", "Jamie".to_string()).unwrap(),
            email: EmailAddress::new("jamie@example.com".to_string()).unwrap(),
            phone: PhoneNumber::new("555-123-4567".to_string()).unwrap(),
            address: None,
            skills: None,
            hours: Hours::new(3.0).unwrap(),
            status: VolunteerStatus::Active,
            join_date: now,
            password_hash: "$argon2id$secret".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(VolunteerData::from(&volunteer)).unwrap();
        assert_eq!(json["_id"], volunteer.id.to_string());
        assert_eq!(json["joinDate"], serde_json::to_value(now).unwrap());
        assert_eq!(json["hours"], 3.0);
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("argon2"));
    }
}
