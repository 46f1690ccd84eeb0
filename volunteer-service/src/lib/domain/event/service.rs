use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::UpdateEventCommand;
use crate::domain::event::ports::EventRepository;
use crate::domain::event::ports::EventServicePort;

/// Domain service implementation for event operations.
pub struct EventService<ER>
where
    ER: EventRepository,
{
    repository: Arc<ER>,
}

impl<ER> EventService<ER>
where
    ER: EventRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EventServicePort for EventService<ER>
where
    ER: EventRepository,
{
    async fn create_event(&self, command: CreateEventCommand) -> Result<Event, EventError> {
        let now = Utc::now();

        let event = Event {
            id: EventId::new(),
            name: command.name,
            date: command.date,
            location: command.location,
            description: command.description,
            required_volunteers: command
                .required_volunteers
                .unwrap_or(Event::DEFAULT_REQUIRED_VOLUNTEERS),
            assigned_volunteers: command.assigned_volunteers,
            status: command.status,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(event).await?;
        tracing::info!(event_id = %created.id, date = %created.date, "Event created");

        Ok(created)
    }

    async fn list_events(&self) -> Result<Vec<Event>, EventError> {
        self.repository.list_all().await
    }

    async fn update_event(
        &self,
        id: &EventId,
        command: UpdateEventCommand,
    ) -> Result<Event, EventError> {
        let mut event = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            event.name = name;
        }
        if let Some(date) = command.date {
            event.date = date;
        }
        if let Some(location) = command.location {
            event.location = location;
        }
        if let Some(description) = command.description {
            event.description = Some(description);
        }
        if let Some(required) = command.required_volunteers {
            event.required_volunteers = required;
        }
        if let Some(assigned) = command.assigned_volunteers {
            event.assigned_volunteers = assigned;
        }
        if let Some(status) = command.status {
            event.status = status;
        }
        event.updated_at = Utc::now();

        self.repository.update(event).await
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), EventError> {
        self.repository.delete(id).await?;
        tracing::info!(event_id = %id, "Event deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use mockall::mock;

    use super::*;
    use crate::domain::event::models::EventStatus;
    use crate::domain::values::RequiredText;
    use crate::domain::volunteer::models::VolunteerId;

    mock! {
        pub TestEventRepository {}

        #[async_trait]
        impl EventRepository for TestEventRepository {
            async fn create(&self, event: Event) -> Result<Event, EventError>;
            async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError>;
            async fn list_all(&self) -> Result<Vec<Event>, EventError>;
            async fn update(&self, event: Event) -> Result<Event, EventError>;
            async fn delete(&self, id: &EventId) -> Result<(), EventError>;
        }
    }

    fn text(value: &str) -> RequiredText {
        RequiredText::new("name", value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_event_defaults() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_create()
            .withf(|e| {
                e.required_volunteers == 10
                    && e.status == EventStatus::Upcoming
                    && e.assigned_volunteers.is_empty()
            })
            .times(1)
            .returning(|e| Ok(e));

        let service = EventService::new(Arc::new(repository));

        let event = service
            .create_event(CreateEventCommand {
                name: text("Food drive"),
                date: Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap(),
                location: text("Town hall"),
                description: None,
                required_volunteers: None,
                assigned_volunteers: Vec::new(),
                status: EventStatus::default(),
            })
            .await
            .unwrap();
        assert_eq!(event.name.as_str(), "Food drive");
    }

    #[tokio::test]
    async fn test_update_event_assigns_volunteers() {
        let mut repository = MockTestEventRepository::new();
        let now = Utc::now();
        let existing = Event {
            id: EventId::new(),
            name: text("Cleanup"),
            date: now,
            location: text("Beach"),
            description: Some("Bring gloves".to_string()),
            required_volunteers: 4,
            assigned_volunteers: Vec::new(),
            status: EventStatus::Upcoming,
            created_at: now,
            updated_at: now,
        };
        let id = existing.id;
        let volunteer = VolunteerId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(move |e| {
                e.assigned_volunteers == vec![volunteer]
                    && e.status == EventStatus::Ongoing
                    && e.description.as_deref() == Some("Bring gloves")
            })
            .times(1)
            .returning(|e| Ok(e));

        let service = EventService::new(Arc::new(repository));

        let updated = service
            .update_event(
                &id,
                UpdateEventCommand {
                    assigned_volunteers: Some(vec![volunteer]),
                    status: Some(EventStatus::Ongoing),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.required_volunteers, 4);
    }

    #[tokio::test]
    async fn test_update_event_not_found() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = EventService::new(Arc::new(repository));

        let result = service
            .update_event(&EventId::new(), UpdateEventCommand::default())
            .await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }
}
