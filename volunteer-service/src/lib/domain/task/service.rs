use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;

/// Domain service implementation for task operations.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError> {
        let now = Utc::now();

        let task = Task {
            id: TaskId::new(),
            event_id: command.event_id,
            volunteer_id: command.volunteer_id,
            title: command.title,
            description: command.description,
            status: command.status,
            priority: command.priority,
            due_date: command.due_date,
            assigned_date: now,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(task).await?;
        tracing::info!(
            task_id = %created.id,
            event_id = %created.event_id,
            volunteer_id = %created.volunteer_id,
            "Task assigned"
        );

        Ok(created)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repository.list_all().await
    }

    async fn update_task(
        &self,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))?;

        if let Some(volunteer_id) = command.volunteer_id {
            task.volunteer_id = volunteer_id;
            task.assigned_date = Utc::now();
        }
        if let Some(title) = command.title {
            task.title = title;
        }
        if let Some(description) = command.description {
            task.description = Some(description);
        }
        if let Some(status) = command.status {
            task.status = status;
        }
        if let Some(priority) = command.priority {
            task.priority = priority;
        }
        if let Some(due_date) = command.due_date {
            task.due_date = Some(due_date);
        }
        task.updated_at = Utc::now();

        let updated = self.repository.update(task).await?;
        tracing::debug!(task_id = %updated.id, status = %updated.status, "Task updated");

        Ok(updated)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError> {
        self.repository.delete(id).await
    }
}
