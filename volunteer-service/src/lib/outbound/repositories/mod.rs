pub mod admin;
pub mod attendance;
pub mod event;
pub mod task;
pub mod volunteer;

pub use admin::PostgresAdminRepository;
pub use attendance::PostgresAttendanceRepository;
pub use event::PostgresEventRepository;
pub use task::PostgresTaskRepository;
pub use volunteer::PostgresVolunteerRepository;

/// Constraint tripped by a unique or foreign key violation, if that is what
/// `error` is.
pub(crate) fn violated_constraint(error: &sqlx::Error) -> Option<&str> {
    let db_err = error.as_database_error()?;
    if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
        db_err.constraint()
    } else {
        None
    }
}
