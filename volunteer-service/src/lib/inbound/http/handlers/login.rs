use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::signup::AdminSessionData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::Session;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::values::EmailAddress;
use crate::domain::volunteer::models::Volunteer;
use crate::inbound::http::messages::VolunteerData;
use crate::inbound::http::router::AppState;

pub async fn login_admin(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<AdminSessionData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .login_admin(body.into_credentials()?)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::ok(session.into()))
}

pub async fn login_volunteer(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<VolunteerSessionData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .login_volunteer(body.into_credentials()?)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::ok(session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl LoginRequest {
    /// A malformed email cannot belong to any account, so it fails like an
    /// unknown one.
    fn into_credentials(self) -> Result<Credentials, ApiError> {
        let email = EmailAddress::new(self.email).map_err(|_| {
            tracing::warn!("Login attempt with malformed email");
            ApiError::Unauthorized("Invalid credentials".to_string())
        })?;

        Ok(Credentials {
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerSessionData {
    pub volunteer: VolunteerData,
    pub token: String,
    pub refresh_token: String,
}

impl From<&Session<Volunteer>> for VolunteerSessionData {
    fn from(session: &Session<Volunteer>) -> Self {
        Self {
            volunteer: (&session.account).into(),
            token: session.tokens.access_token.clone(),
            refresh_token: session.tokens.refresh_token.clone(),
        }
    }
}
