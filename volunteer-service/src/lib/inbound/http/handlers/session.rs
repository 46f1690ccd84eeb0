use axum::Extension;
use axum::Json;
use serde_json::json;
use serde_json::Value;

use super::ApiSuccess;
use crate::inbound::http::messages::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Tokens are stateless; logging out only tells the client to discard them.
pub async fn logout(Extension(user): Extension<AuthenticatedUser>) -> ApiSuccess<MessageData> {
    tracing::info!(user_id = %user.user_id(), role = %user.role(), "User logged out");

    ApiSuccess::ok(MessageData::new("Logged out successfully"))
}

/// Echo the claims of the presented token.
pub async fn verify(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({
        "valid": true,
        "claims": user.claims,
    }))
}
