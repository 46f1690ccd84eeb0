use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;

/// Port for task domain service operations.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `EventNotFound` - Referenced event does not exist
    /// * `VolunteerNotFound` - Referenced volunteer does not exist
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError>;

    /// List all tasks, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `VolunteerNotFound` - Reassigned volunteer does not exist
    async fn update_task(&self, id: &TaskId, command: UpdateTaskCommand)
        -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for task aggregate.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// # Errors
    /// * `EventNotFound` / `VolunteerNotFound` - Foreign key target missing
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;

    /// Retrieve all tasks, newest first.
    async fn list_all(&self) -> Result<Vec<Task>, TaskError>;

    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
}
