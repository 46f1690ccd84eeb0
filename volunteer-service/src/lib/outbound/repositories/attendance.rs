use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::Attendance;
use crate::domain::attendance::models::AttendanceId;
use crate::domain::attendance::models::AttendanceStatus;
use crate::domain::attendance::ports::AttendanceRepository;
use crate::domain::event::models::EventId;
use crate::domain::values::Hours;
use crate::domain::volunteer::models::VolunteerId;
use crate::outbound::repositories::violated_constraint;

pub struct PostgresAttendanceRepository {
    pool: PgPool,
}

impl PostgresAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_attendance(row: PgRow) -> Result<Attendance, AttendanceError> {
        Ok(Attendance {
            id: AttendanceId(row.get("id")),
            volunteer_id: VolunteerId(row.get("volunteer_id")),
            event_id: EventId(row.get("event_id")),
            date: row.get("date"),
            status: row.get::<String, _>("status").parse()?,
            hours: Hours::new(row.get("hours"))?,
            created_at: row.get("created_at"),
        })
    }

    fn map_write_error(e: sqlx::Error, record: &Attendance) -> AttendanceError {
        match violated_constraint(&e) {
            Some("attendance_volunteer_id_fkey") => {
                AttendanceError::VolunteerNotFound(record.volunteer_id.to_string())
            }
            Some("attendance_event_id_fkey") => {
                AttendanceError::EventNotFound(record.event_id.to_string())
            }
            _ => AttendanceError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl AttendanceRepository for PostgresAttendanceRepository {
    async fn list_all(&self) -> Result<Vec<Attendance>, AttendanceError> {
        let rows = sqlx::query(
            r#"
            SELECT id, volunteer_id, event_id, date, status, hours, created_at
            FROM attendance
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AttendanceError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_attendance).collect()
    }

    async fn insert_batch(
        &self,
        records: Vec<Attendance>,
    ) -> Result<Vec<Attendance>, AttendanceError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AttendanceError::DatabaseError(e.to_string()))?;

        for record in &records {
            sqlx::query(
                r#"
                INSERT INTO attendance (id, volunteer_id, event_id, date, status, hours, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(record.id.as_uuid())
            .bind(record.volunteer_id.as_uuid())
            .bind(record.event_id.as_uuid())
            .bind(record.date)
            .bind(record.status.as_str())
            .bind(record.hours.value())
            .bind(record.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::map_write_error(e, record))?;

            if record.status == AttendanceStatus::Present {
                sqlx::query(
                    r#"
                    UPDATE volunteers
                    SET hours = hours + $2, updated_at = NOW()
                    WHERE id = $1
                    "#,
                )
                .bind(record.volunteer_id.as_uuid())
                .bind(record.credited_hours().value())
                .execute(&mut *tx)
                .await
                .map_err(|e| AttendanceError::DatabaseError(e.to_string()))?;
            }
        }

        // Dropping `tx` on any early return above rolls the whole batch back.
        tx.commit()
            .await
            .map_err(|e| AttendanceError::DatabaseError(e.to_string()))?;

        tracing::debug!(count = records.len(), "Attendance batch committed");

        Ok(records)
    }
}
