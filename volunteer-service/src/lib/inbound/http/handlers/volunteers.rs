use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::values::EmailAddress;
use crate::domain::values::Hours;
use crate::domain::values::PhoneNumber;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::errors::VolunteerError;
use crate::domain::volunteer::models::CreateVolunteerCommand;
use crate::domain::volunteer::models::UpdateVolunteerCommand;
use crate::domain::volunteer::models::VolunteerId;
use crate::domain::volunteer::models::VolunteerStatus;
use crate::domain::volunteer::ports::VolunteerServicePort;
use crate::inbound::http::messages::parse_date;
use crate::inbound::http::messages::MessageData;
use crate::inbound::http::messages::VolunteerData;
use crate::inbound::http::router::AppState;

pub async fn list_volunteers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<VolunteerData>>, ApiError> {
    let volunteers = state.volunteer_service.list_volunteers().await?;

    Ok(ApiSuccess::ok(
        volunteers.iter().map(VolunteerData::from).collect(),
    ))
}

pub async fn create_volunteer(
    State(state): State<AppState>,
    body: Result<Json<CreateVolunteerRequest>, JsonRejection>,
) -> Result<ApiSuccess<VolunteerData>, ApiError> {
    let Json(body) = body?;

    state
        .volunteer_service
        .create_volunteer(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref volunteer| ApiSuccess::created(volunteer.into()))
}

pub async fn update_volunteer(
    State(state): State<AppState>,
    Path(volunteer_id): Path<String>,
    body: Result<Json<UpdateVolunteerRequest>, JsonRejection>,
) -> Result<ApiSuccess<VolunteerData>, ApiError> {
    let Json(body) = body?;
    let volunteer_id = VolunteerId::from_string(&volunteer_id).map_err(VolunteerError::from)?;

    state
        .volunteer_service
        .update_volunteer(&volunteer_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref volunteer| ApiSuccess::ok(volunteer.into()))
}

pub async fn delete_volunteer(
    State(state): State<AppState>,
    Path(volunteer_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let volunteer_id = VolunteerId::from_string(&volunteer_id).map_err(VolunteerError::from)?;

    state
        .volunteer_service
        .delete_volunteer(&volunteer_id)
        .await?;

    Ok(ApiSuccess::ok(MessageData::new(format!(
        "Volunteer {} deleted",
        volunteer_id
    ))))
}

/// HTTP request body for creating a volunteer (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolunteerRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    password: String,
    address: Option<String>,
    skills: Option<String>,
    status: Option<String>,
    join_date: Option<String>,
}

impl CreateVolunteerRequest {
    fn try_into_command(self) -> Result<CreateVolunteerCommand, VolunteerError> {
        Ok(CreateVolunteerCommand {
            name: RequiredText::new("name", self.name)?,
            email: EmailAddress::new(self.email)?,
            phone: PhoneNumber::new(self.phone)?,
            password: self.password,
            address: self.address,
            skills: self.skills,
            status: self
                .status
                .map(|s| s.parse::<VolunteerStatus>())
                .transpose()?
                .unwrap_or_default(),
            join_date: self
                .join_date
                .map(|d| parse_date(&d).map_err(VolunteerError::InvalidDate))
                .transpose()?,
        })
    }
}

/// HTTP request body for a partial volunteer update (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolunteerRequest {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    skills: Option<String>,
    hours: Option<f64>,
    status: Option<String>,
    password: Option<String>,
}

impl UpdateVolunteerRequest {
    fn try_into_command(self) -> Result<UpdateVolunteerCommand, VolunteerError> {
        Ok(UpdateVolunteerCommand {
            name: self
                .name
                .map(|n| RequiredText::new("name", n))
                .transpose()?,
            email: self.email.map(EmailAddress::new).transpose()?,
            phone: self.phone.map(PhoneNumber::new).transpose()?,
            address: self.address,
            skills: self.skills,
            hours: self.hours.map(Hours::new).transpose()?,
            status: self.status.map(|s| s.parse::<VolunteerStatus>()).transpose()?,
            password: self.password,
        })
    }
}
