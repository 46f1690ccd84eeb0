use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::event::models::EventId;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::models::VolunteerId;
use crate::outbound::repositories::violated_constraint;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: PgRow) -> Result<Task, TaskError> {
        Ok(Task {
            id: TaskId(row.get("id")),
            event_id: EventId(row.get("event_id")),
            volunteer_id: VolunteerId(row.get("volunteer_id")),
            title: RequiredText::new("title", row.get("title"))?,
            description: row.get("description"),
            status: row.get::<String, _>("status").parse()?,
            priority: row.get::<String, _>("priority").parse()?,
            due_date: row.get("due_date"),
            assigned_date: row.get("assigned_date"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    fn map_write_error(e: sqlx::Error, task: &Task) -> TaskError {
        match violated_constraint(&e) {
            Some("tasks_event_id_fkey") => TaskError::EventNotFound(task.event_id.to_string()),
            Some("tasks_volunteer_id_fkey") => {
                TaskError::VolunteerNotFound(task.volunteer_id.to_string())
            }
            _ => TaskError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, event_id, volunteer_id, title, description, status, priority,
                               due_date, assigned_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(task.id.as_uuid())
        .bind(task.event_id.as_uuid())
        .bind(task.volunteer_id.as_uuid())
        .bind(task.title.as_str())
        .bind(task.description.as_deref())
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.due_date)
        .bind(task.assigned_date)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &task))?;

        Ok(task)
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError> {
        let row = sqlx::query(
            r#"
            SELECT id, event_id, volunteer_id, title, description, status, priority,
                   due_date, assigned_date, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_task).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query(
            r#"
            SELECT id, event_id, volunteer_id, title, description, status, priority,
                   due_date, assigned_date, created_at, updated_at
            FROM tasks
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_task).collect()
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET volunteer_id = $2, title = $3, description = $4, status = $5, priority = $6,
                due_date = $7, assigned_date = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(task.id.as_uuid())
        .bind(task.volunteer_id.as_uuid())
        .bind(task.title.as_str())
        .bind(task.description.as_deref())
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.due_date)
        .bind(task.assigned_date)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &task))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(task.id.to_string()));
        }

        Ok(task)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
