use async_trait::async_trait;

use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::Attendance;
use crate::domain::attendance::models::RecordAttendanceCommand;

/// Port for attendance domain service operations.
#[async_trait]
pub trait AttendanceServicePort: Send + Sync + 'static {
    /// List all attendance records, most recent date first.
    async fn list_attendance(&self) -> Result<Vec<Attendance>, AttendanceError>;

    /// Store a batch of attendance records and credit volunteer hours.
    ///
    /// The batch is all-or-nothing.
    ///
    /// # Errors
    /// * `EmptyBatch` - No records supplied
    /// * `VolunteerNotFound` / `EventNotFound` - A referenced record is missing
    /// * `DatabaseError` - Database operation failed
    async fn record_bulk(
        &self,
        commands: Vec<RecordAttendanceCommand>,
    ) -> Result<Vec<Attendance>, AttendanceError>;
}

/// Persistence operations for attendance records.
#[async_trait]
pub trait AttendanceRepository: Send + Sync + 'static {
    /// Retrieve all records ordered by date descending.
    async fn list_all(&self) -> Result<Vec<Attendance>, AttendanceError>;

    /// Insert every record and add each record's `credited_hours` to its
    /// volunteer, in a single transaction.
    async fn insert_batch(
        &self,
        records: Vec<Attendance>,
    ) -> Result<Vec<Attendance>, AttendanceError>;
}
