use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::ChoiceError;
use crate::domain::values::uuid_id;
use crate::domain::values::EmailAddress;
use crate::domain::values::Hours;
use crate::domain::values::PhoneNumber;
use crate::domain::values::RequiredText;

uuid_id!(
    /// Volunteer unique identifier type
    VolunteerId
);

/// Volunteer aggregate entity.
///
/// Volunteers are also login identities: `password_hash` is checked by
/// `/auth/volunteer/login` and never leaves the service.
#[derive(Debug, Clone)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub name: RequiredText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub hours: Hours,
    pub status: VolunteerStatus,
    pub join_date: DateTime<Utc>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Volunteer {
    /// Identity carried by tokens issued to this volunteer.
    pub fn identity(&self) -> auth::Identity {
        auth::Identity::new(self.id, self.email.as_str(), auth::Role::Volunteer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolunteerStatus {
    #[default]
    Active,
    Inactive,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolunteerStatus::Active => "active",
            VolunteerStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for VolunteerStatus {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(VolunteerStatus::Active),
            "inactive" => Ok(VolunteerStatus::Inactive),
            other => Err(ChoiceError {
                field: "status",
                value: other.to_string(),
                expected: "active, inactive",
            }),
        }
    }
}

impl fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new volunteer with domain types
#[derive(Debug)]
pub struct CreateVolunteerCommand {
    pub name: RequiredText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    /// Plain text password (will be hashed by service)
    pub password: String,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub status: VolunteerStatus,
    pub join_date: Option<DateTime<Utc>>,
}

/// Command to update an existing volunteer.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateVolunteerCommand {
    pub name: Option<RequiredText>,
    pub email: Option<EmailAddress>,
    pub phone: Option<PhoneNumber>,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub hours: Option<Hours>,
    pub status: Option<VolunteerStatus>,
    pub password: Option<String>,
}
