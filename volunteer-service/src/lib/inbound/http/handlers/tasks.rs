use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::event::models::EventId;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskPriority;
use crate::domain::task::models::TaskStatus;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::models::VolunteerId;
use crate::inbound::http::messages::parse_date;
use crate::inbound::http::messages::MessageData;
use crate::inbound::http::messages::TaskData;
use crate::inbound::http::router::AppState;

pub async fn list_tasks(State(state): State<AppState>) -> Result<ApiSuccess<Vec<TaskData>>, ApiError> {
    let tasks = state.task_service.list_tasks().await?;

    Ok(ApiSuccess::ok(tasks.iter().map(TaskData::from).collect()))
}

pub async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    let Json(body) = body?;

    state
        .task_service
        .create_task(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::created(task.into()))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    let Json(body) = body?;
    let task_id = TaskId::from_string(&task_id).map_err(TaskError::from)?;

    state
        .task_service
        .update_task(&task_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::ok(task.into()))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let task_id = TaskId::from_string(&task_id).map_err(TaskError::from)?;

    state.task_service.delete_task(&task_id).await?;

    Ok(ApiSuccess::ok(MessageData::new(format!(
        "Task {} deleted",
        task_id
    ))))
}

fn parse_due_date(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, TaskError> {
    parse_date(raw).map_err(TaskError::InvalidDate)
}

/// HTTP request body for assigning a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    event_id: String,
    #[serde(default)]
    volunteer_id: String,
    #[serde(default)]
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
}

impl CreateTaskRequest {
    fn try_into_command(self) -> Result<CreateTaskCommand, TaskError> {
        Ok(CreateTaskCommand {
            event_id: EventId::from_string(&self.event_id)?,
            volunteer_id: VolunteerId::from_string(&self.volunteer_id)?,
            title: RequiredText::new("title", self.title)?,
            description: self.description,
            status: self
                .status
                .map(|s| s.parse::<TaskStatus>())
                .transpose()?
                .unwrap_or_default(),
            priority: self
                .priority
                .map(|p| p.parse::<TaskPriority>())
                .transpose()?
                .unwrap_or_default(),
            due_date: self.due_date.as_deref().map(parse_due_date).transpose()?,
        })
    }
}

/// HTTP request body for a partial task update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    volunteer_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
}

impl UpdateTaskRequest {
    fn try_into_command(self) -> Result<UpdateTaskCommand, TaskError> {
        Ok(UpdateTaskCommand {
            volunteer_id: self
                .volunteer_id
                .as_deref()
                .map(VolunteerId::from_string)
                .transpose()?,
            title: self
                .title
                .map(|t| RequiredText::new("title", t))
                .transpose()?,
            description: self.description,
            status: self.status.map(|s| s.parse::<TaskStatus>()).transpose()?,
            priority: self.priority.map(|p| p.parse::<TaskPriority>()).transpose()?,
            due_date: self.due_date.as_deref().map(parse_due_date).transpose()?,
        })
    }
}
