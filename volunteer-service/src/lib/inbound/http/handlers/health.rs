use axum::extract::State;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub database: &'static str,
}

/// Liveness probe; reports whether the database answers a ping.
pub async fn health(State(state): State<AppState>) -> ApiSuccess<HealthData> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "connected",
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            "disconnected"
        }
    };

    ApiSuccess::ok(HealthData {
        status: if database == "connected" { "ok" } else { "degraded" },
        database,
    })
}
