use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::Attendance;
use crate::domain::attendance::models::AttendanceId;
use crate::domain::attendance::models::RecordAttendanceCommand;
use crate::domain::attendance::ports::AttendanceRepository;
use crate::domain::attendance::ports::AttendanceServicePort;

/// Domain service implementation for attendance operations.
pub struct AttendanceService<AR>
where
    AR: AttendanceRepository,
{
    repository: Arc<AR>,
}

impl<AR> AttendanceService<AR>
where
    AR: AttendanceRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AttendanceServicePort for AttendanceService<AR>
where
    AR: AttendanceRepository,
{
    async fn list_attendance(&self) -> Result<Vec<Attendance>, AttendanceError> {
        self.repository.list_all().await
    }

    async fn record_bulk(
        &self,
        commands: Vec<RecordAttendanceCommand>,
    ) -> Result<Vec<Attendance>, AttendanceError> {
        if commands.is_empty() {
            return Err(AttendanceError::EmptyBatch);
        }

        let now = Utc::now();
        let records: Vec<Attendance> = commands
            .into_iter()
            .map(|command| Attendance {
                id: AttendanceId::new(),
                volunteer_id: command.volunteer_id,
                event_id: command.event_id,
                date: command.date,
                status: command.status,
                hours: command.hours,
                created_at: now,
            })
            .collect();

        let stored = self.repository.insert_batch(records).await?;
        tracing::info!(count = stored.len(), "Attendance recorded");

        Ok(stored)
    }
}
