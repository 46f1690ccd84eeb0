use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::ports::EventRepository;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::models::VolunteerId;

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: PgRow) -> Result<Event, EventError> {
        let required: i64 = row.get("required_volunteers");
        let assigned: Vec<uuid::Uuid> = row.get("assigned_volunteers");

        Ok(Event {
            id: EventId(row.get("id")),
            name: RequiredText::new("name", row.get("name"))?,
            date: row.get("date"),
            location: RequiredText::new("location", row.get("location"))?,
            description: row.get("description"),
            required_volunteers: u32::try_from(required)
                .map_err(|e| EventError::Unknown(format!("required_volunteers: {}", e)))?,
            assigned_volunteers: assigned.into_iter().map(VolunteerId).collect(),
            status: row.get::<String, _>("status").parse()?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    fn assigned_uuids(event: &Event) -> Vec<uuid::Uuid> {
        event.assigned_volunteers.iter().map(|id| id.0).collect()
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn create(&self, event: Event) -> Result<Event, EventError> {
        sqlx::query(
            r#"
            INSERT INTO events (id, name, date, location, description, required_volunteers,
                                assigned_volunteers, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(event.name.as_str())
        .bind(event.date)
        .bind(event.location.as_str())
        .bind(event.description.as_deref())
        .bind(i64::from(event.required_volunteers))
        .bind(Self::assigned_uuids(&event))
        .bind(event.status.as_str())
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        Ok(event)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, date, location, description, required_volunteers,
                   assigned_volunteers, status, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_event).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Event>, EventError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, date, location, description, required_volunteers,
                   assigned_volunteers, status, created_at, updated_at
            FROM events
            ORDER BY date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_event).collect()
    }

    async fn update(&self, event: Event) -> Result<Event, EventError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $2, date = $3, location = $4, description = $5,
                required_volunteers = $6, assigned_volunteers = $7, status = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(event.name.as_str())
        .bind(event.date)
        .bind(event.location.as_str())
        .bind(event.description.as_deref())
        .bind(i64::from(event.required_volunteers))
        .bind(Self::assigned_uuids(&event))
        .bind(event.status.as_str())
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(event.id.to_string()));
        }

        Ok(event)
    }

    async fn delete(&self, id: &EventId) -> Result<(), EventError> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
