use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::RecordAttendanceCommand;
use crate::domain::attendance::ports::AttendanceServicePort;
use crate::domain::event::models::EventId;
use crate::domain::values::Hours;
use crate::domain::volunteer::models::VolunteerId;
use crate::inbound::http::messages::parse_date;
use crate::inbound::http::messages::AttendanceData;
use crate::inbound::http::router::AppState;

pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AttendanceData>>, ApiError> {
    let records = state.attendance_service.list_attendance().await?;

    Ok(ApiSuccess::ok(
        records.iter().map(AttendanceData::from).collect(),
    ))
}

pub async fn record_bulk_attendance(
    State(state): State<AppState>,
    body: Result<Json<BulkAttendanceRequest>, JsonRejection>,
) -> Result<ApiSuccess<BulkAttendanceResponseData>, ApiError> {
    let Json(body) = body?;

    let stored = state
        .attendance_service
        .record_bulk(body.try_into_commands()?)
        .await?;

    Ok(ApiSuccess::created(BulkAttendanceResponseData {
        message: "Attendance added".to_string(),
        inserted_ids: stored.iter().map(|record| record.id.to_string()).collect(),
    }))
}

/// HTTP request body for bulk attendance: `{"records": [...]}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulkAttendanceRequest {
    #[serde(default)]
    records: Vec<AttendanceRecordRequest>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordRequest {
    #[serde(default)]
    volunteer_id: String,
    #[serde(default)]
    event_id: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    status: String,
    hours: Option<f64>,
}

impl BulkAttendanceRequest {
    fn try_into_commands(self) -> Result<Vec<RecordAttendanceCommand>, AttendanceError> {
        self.records
            .into_iter()
            .map(AttendanceRecordRequest::try_into_command)
            .collect()
    }
}

impl AttendanceRecordRequest {
    fn try_into_command(self) -> Result<RecordAttendanceCommand, AttendanceError> {
        Ok(RecordAttendanceCommand {
            volunteer_id: VolunteerId::from_string(&self.volunteer_id)?,
            event_id: EventId::from_string(&self.event_id)?,
            date: parse_date(&self.date).map_err(AttendanceError::InvalidDate)?,
            status: self.status.parse()?,
            hours: Hours::new(self.hours.unwrap_or(0.0))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkAttendanceResponseData {
    pub message: String,
    pub inserted_ids: Vec<String>,
}
