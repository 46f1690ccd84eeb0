use async_trait::async_trait;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::UpdateEventCommand;

/// Port for event domain service operations.
#[async_trait]
pub trait EventServicePort: Send + Sync + 'static {
    async fn create_event(&self, command: CreateEventCommand) -> Result<Event, EventError>;

    /// List all events, earliest date first.
    async fn list_events(&self) -> Result<Vec<Event>, EventError>;

    /// # Errors
    /// * `NotFound` - Event does not exist
    async fn update_event(
        &self,
        id: &EventId,
        command: UpdateEventCommand,
    ) -> Result<Event, EventError>;

    /// Delete an event together with its tasks and attendance.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    async fn delete_event(&self, id: &EventId) -> Result<(), EventError>;
}

/// Persistence operations for event aggregate.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    async fn create(&self, event: Event) -> Result<Event, EventError>;

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError>;

    /// Retrieve all events ordered by date ascending.
    async fn list_all(&self) -> Result<Vec<Event>, EventError>;

    /// # Errors
    /// * `NotFound` - Event does not exist
    async fn update(&self, event: Event) -> Result<Event, EventError>;

    /// # Errors
    /// * `NotFound` - Event does not exist
    async fn delete(&self, id: &EventId) -> Result<(), EventError>;
}
