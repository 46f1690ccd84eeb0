use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Admin;
use crate::domain::identity::models::Session;
use crate::domain::identity::models::SignupAdminCommand;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::values::EmailAddress;
use crate::domain::values::RequiredText;
use crate::inbound::http::messages::AdminData;
use crate::inbound::http::router::AppState;

pub async fn signup_admin(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<ApiSuccess<AdminSessionData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .signup_admin(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::created(session.into()))
}

/// HTTP request body for admin signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupAdminCommand, IdentityError> {
        Ok(SignupAdminCommand {
            name: RequiredText::new("name", self.name)?,
            email: EmailAddress::new(self.email)?,
            password: self.password,
        })
    }
}

/// Admin account plus freshly issued tokens, as returned by signup and login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminSessionData {
    pub admin: AdminData,
    pub token: String,
    pub refresh_token: String,
}

impl From<&Session<Admin>> for AdminSessionData {
    fn from(session: &Session<Admin>) -> Self {
        Self {
            admin: (&session.account).into(),
            token: session.tokens.access_token.clone(),
            refresh_token: session.tokens.refresh_token.clone(),
        }
    }
}
