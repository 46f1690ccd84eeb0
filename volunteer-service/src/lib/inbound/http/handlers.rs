pub mod attendance;
pub mod events;
pub mod health;
pub mod login;
pub mod refresh;
pub mod session;
pub mod signup;
pub mod tasks;
pub mod volunteers;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::attendance::errors::AttendanceError;
use crate::domain::event::errors::EventError;
use crate::domain::identity::errors::IdentityError;
use crate::domain::task::errors::TaskError;
use crate::domain::volunteer::errors::VolunteerError;

/// Successful response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }

    pub fn created(data: T) -> Self {
        Self::new(StatusCode::CREATED, data)
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure leaves the service as `{"error": message}` with one of these
/// statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InternalServerError(detail) => {
                // Details stay in the log; clients get a generic message.
                tracing::error!(error = %detail, "Request failed");
                "Internal server error".to_string()
            }
            ApiError::BadRequest(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                msg
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::InvalidName(_)
            | IdentityError::InvalidEmail(_)
            | IdentityError::MissingPassword
            | IdentityError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            IdentityError::InvalidCredentials | IdentityError::InvalidToken(_) => {
                ApiError::Unauthorized(err.to_string())
            }
            IdentityError::DatabaseError(_) | IdentityError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<VolunteerError> for ApiError {
    fn from(err: VolunteerError) -> Self {
        match err {
            VolunteerError::NotFound(_) => ApiError::NotFound(err.to_string()),
            VolunteerError::InvalidId(_)
            | VolunteerError::InvalidText(_)
            | VolunteerError::InvalidEmail(_)
            | VolunteerError::InvalidPhone(_)
            | VolunteerError::InvalidHours(_)
            | VolunteerError::InvalidChoice(_)
            | VolunteerError::InvalidDate(_)
            | VolunteerError::MissingPassword
            | VolunteerError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            VolunteerError::DatabaseError(_) | VolunteerError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EventError::InvalidId(_)
            | EventError::InvalidText(_)
            | EventError::InvalidChoice(_)
            | EventError::InvalidDate(_) => ApiError::BadRequest(err.to_string()),
            EventError::DatabaseError(_) | EventError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) | TaskError::EventNotFound(_) | TaskError::VolunteerNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            TaskError::InvalidId(_)
            | TaskError::InvalidText(_)
            | TaskError::InvalidChoice(_)
            | TaskError::InvalidDate(_) => ApiError::BadRequest(err.to_string()),
            TaskError::DatabaseError(_) | TaskError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AttendanceError> for ApiError {
    fn from(err: AttendanceError) -> Self {
        match err {
            AttendanceError::VolunteerNotFound(_) | AttendanceError::EventNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            AttendanceError::InvalidId(_)
            | AttendanceError::InvalidHours(_)
            | AttendanceError::InvalidChoice(_)
            | AttendanceError::InvalidDate(_)
            | AttendanceError::EmptyBatch => ApiError::BadRequest(err.to_string()),
            AttendanceError::DatabaseError(_) | AttendanceError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::NotFound("Volunteer not found: 42".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Volunteer not found: 42"})
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            ApiError::InternalServerError("password authentication failed for user".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Internal server error");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(IdentityError::EmailAlreadyExists("a@b.com".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(IdentityError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(VolunteerError::MissingPassword),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(TaskError::EventNotFound("e".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(AttendanceError::EmptyBatch),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(EventError::DatabaseError("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{error}");
        }
    }
}
