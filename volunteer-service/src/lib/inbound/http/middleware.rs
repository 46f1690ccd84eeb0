use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;
use auth::TokenType;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::GatePolicy;
use crate::inbound::http::handlers::ApiError;

/// Claims of the caller, inserted into request extensions by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        self.claims.user_id()
    }

    pub fn role(&self) -> auth::Role {
        self.claims.role
    }
}

/// State of the access gate on protected routes.
#[derive(Clone)]
pub struct AccessGate {
    authenticator: Arc<Authenticator>,
    policy: GatePolicy,
}

impl AccessGate {
    pub fn new(authenticator: Arc<Authenticator>, policy: GatePolicy) -> Self {
        Self {
            authenticator,
            policy,
        }
    }

    /// Verify `token` and apply the gate policy to its type.
    pub fn admit(&self, token: &str) -> Result<Claims, ApiError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, "JWT validation failed");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        })?;

        if self.policy == GatePolicy::AccessTokenOnly && claims.token_type != TokenType::Access {
            tracing::warn!(
                user_id = %claims.sub,
                token_type = %claims.token_type,
                "Non-access token presented to protected route"
            );
            return Err(ApiError::Unauthorized("Access token required".to_string()));
        }

        Ok(claims)
    }
}

/// Rejects requests without a valid bearer token; otherwise attaches
/// [`AuthenticatedUser`] and runs the wrapped handler.
pub async fn authenticate(
    State(gate): State<AccessGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;
    let claims = gate.admit(token)?;

    tracing::debug!(user_id = %claims.sub, role = %claims.role, "Request authenticated");
    req.extensions_mut().insert(AuthenticatedUser { claims });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}
