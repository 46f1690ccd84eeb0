use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::attendance::list_attendance;
use super::handlers::attendance::record_bulk_attendance;
use super::handlers::events::create_event;
use super::handlers::events::delete_event;
use super::handlers::events::list_events;
use super::handlers::events::update_event;
use super::handlers::health::health;
use super::handlers::login::login_admin;
use super::handlers::login::login_volunteer;
use super::handlers::refresh::refresh_token;
use super::handlers::session::logout;
use super::handlers::session::verify;
use super::handlers::signup::signup_admin;
use super::handlers::tasks::create_task;
use super::handlers::tasks::delete_task;
use super::handlers::tasks::list_tasks;
use super::handlers::tasks::update_task;
use super::handlers::volunteers::create_volunteer;
use super::handlers::volunteers::delete_volunteer;
use super::handlers::volunteers::list_volunteers;
use super::handlers::volunteers::update_volunteer;
use super::middleware::authenticate;
use super::middleware::AccessGate;
use crate::config::GatePolicy;
use crate::domain::attendance::service::AttendanceService;
use crate::domain::event::service::EventService;
use crate::domain::identity::service::AuthService;
use crate::domain::task::service::TaskService;
use crate::domain::volunteer::service::VolunteerService;
use crate::outbound::repositories::PostgresAdminRepository;
use crate::outbound::repositories::PostgresAttendanceRepository;
use crate::outbound::repositories::PostgresEventRepository;
use crate::outbound::repositories::PostgresTaskRepository;
use crate::outbound::repositories::PostgresVolunteerRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresAdminRepository, PostgresVolunteerRepository>>,
    pub volunteer_service: Arc<VolunteerService<PostgresVolunteerRepository>>,
    pub event_service: Arc<EventService<PostgresEventRepository>>,
    pub task_service: Arc<TaskService<PostgresTaskRepository>>,
    pub attendance_service: Arc<AttendanceService<PostgresAttendanceRepository>>,
    pub access_gate: AccessGate,
    pub pool: PgPool,
}

impl AppState {
    /// Wire repositories and services over one connection pool.
    pub fn new(pool: PgPool, authenticator: Arc<Authenticator>, gate_policy: GatePolicy) -> Self {
        let volunteer_repository = Arc::new(PostgresVolunteerRepository::new(pool.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::new(PostgresAdminRepository::new(pool.clone())),
                Arc::clone(&volunteer_repository),
                Arc::clone(&authenticator),
            )),
            volunteer_service: Arc::new(VolunteerService::new(volunteer_repository)),
            event_service: Arc::new(EventService::new(Arc::new(PostgresEventRepository::new(
                pool.clone(),
            )))),
            task_service: Arc::new(TaskService::new(Arc::new(PostgresTaskRepository::new(
                pool.clone(),
            )))),
            attendance_service: Arc::new(AttendanceService::new(Arc::new(
                PostgresAttendanceRepository::new(pool.clone()),
            ))),
            access_gate: AccessGate::new(authenticator, gate_policy),
            pool,
        }
    }
}

/// Build the HTTP application.
///
/// `cors_origins` lists allowed origins; an empty list allows any origin.
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/auth/admin/signup", post(signup_admin))
        .route("/auth/admin/login", post(login_admin))
        .route("/auth/volunteer/login", post(login_volunteer))
        .route("/auth/refresh", post(refresh_token));

    let protected_routes = Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/verify", get(verify))
        .route("/api/volunteers", get(list_volunteers).post(create_volunteer))
        .route(
            "/api/volunteers/:volunteer_id",
            put(update_volunteer).delete(delete_volunteer),
        )
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/:event_id",
            put(update_event).delete(delete_event),
        )
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/:task_id", put(update_task).delete(delete_task))
        .route("/api/attendance", get(list_attendance))
        .route("/api/attendance/bulk", post(record_bulk_attendance))
        .route_layer(middleware::from_fn_with_state(
            state.access_gate.clone(),
            authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
