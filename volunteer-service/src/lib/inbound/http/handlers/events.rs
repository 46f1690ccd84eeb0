use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::EventId;
use crate::domain::event::models::EventStatus;
use crate::domain::event::models::UpdateEventCommand;
use crate::domain::event::ports::EventServicePort;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::models::VolunteerId;
use crate::inbound::http::messages::parse_date;
use crate::inbound::http::messages::EventData;
use crate::inbound::http::messages::MessageData;
use crate::inbound::http::router::AppState;

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EventData>>, ApiError> {
    let events = state.event_service.list_events().await?;

    Ok(ApiSuccess::ok(events.iter().map(EventData::from).collect()))
}

pub async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let Json(body) = body?;

    state
        .event_service
        .create_event(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::created(event.into()))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let Json(body) = body?;
    let event_id = EventId::from_string(&event_id).map_err(EventError::from)?;

    state
        .event_service
        .update_event(&event_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::ok(event.into()))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let event_id = EventId::from_string(&event_id).map_err(EventError::from)?;

    state.event_service.delete_event(&event_id).await?;

    Ok(ApiSuccess::ok(MessageData::new(format!(
        "Event {} deleted",
        event_id
    ))))
}

fn parse_event_date(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, EventError> {
    parse_date(raw).map_err(EventError::InvalidDate)
}

fn parse_volunteer_ids(raw: Vec<String>) -> Result<Vec<VolunteerId>, EventError> {
    raw.iter()
        .map(|id| VolunteerId::from_string(id).map_err(EventError::from))
        .collect()
}

/// HTTP request body for creating an event (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    location: String,
    description: Option<String>,
    required_volunteers: Option<u32>,
    assigned_volunteers: Option<Vec<String>>,
    status: Option<String>,
}

impl CreateEventRequest {
    fn try_into_command(self) -> Result<CreateEventCommand, EventError> {
        Ok(CreateEventCommand {
            name: RequiredText::new("name", self.name)?,
            date: parse_event_date(&self.date)?,
            location: RequiredText::new("location", self.location)?,
            description: self.description,
            required_volunteers: self.required_volunteers,
            assigned_volunteers: parse_volunteer_ids(
                self.assigned_volunteers.unwrap_or_default(),
            )?,
            status: self
                .status
                .map(|s| s.parse::<EventStatus>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// HTTP request body for a partial event update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
    description: Option<String>,
    required_volunteers: Option<u32>,
    assigned_volunteers: Option<Vec<String>>,
    status: Option<String>,
}

impl UpdateEventRequest {
    fn try_into_command(self) -> Result<UpdateEventCommand, EventError> {
        Ok(UpdateEventCommand {
            name: self
                .name
                .map(|n| RequiredText::new("name", n))
                .transpose()?,
            date: self.date.as_deref().map(parse_event_date).transpose()?,
            location: self
                .location
                .map(|l| RequiredText::new("location", l))
                .transpose()?,
            description: self.description,
            required_volunteers: self.required_volunteers,
            assigned_volunteers: self
                .assigned_volunteers
                .map(parse_volunteer_ids)
                .transpose()?,
            status: self.status.map(|s| s.parse::<EventStatus>()).transpose()?,
        })
    }
}
