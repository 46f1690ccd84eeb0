use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::values::Hours;
use crate::domain::volunteer::errors::VolunteerError;
use crate::domain::volunteer::models::CreateVolunteerCommand;
use crate::domain::volunteer::models::UpdateVolunteerCommand;
use crate::domain::volunteer::models::Volunteer;
use crate::domain::volunteer::models::VolunteerId;
use crate::domain::volunteer::ports::VolunteerRepository;
use crate::domain::volunteer::ports::VolunteerServicePort;

/// Domain service implementation for volunteer operations.
pub struct VolunteerService<VR>
where
    VR: VolunteerRepository,
{
    repository: Arc<VR>,
    password_hasher: auth::PasswordHasher,
}

impl<VR> VolunteerService<VR>
where
    VR: VolunteerRepository,
{
    pub fn new(repository: Arc<VR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, VolunteerError> {
        if password.is_empty() {
            return Err(VolunteerError::MissingPassword);
        }

        self.password_hasher
            .hash(password)
            .map_err(|e| VolunteerError::Unknown(e.to_string()))
    }
}

#[async_trait]
impl<VR> VolunteerServicePort for VolunteerService<VR>
where
    VR: VolunteerRepository,
{
    async fn create_volunteer(
        &self,
        command: CreateVolunteerCommand,
    ) -> Result<Volunteer, VolunteerError> {
        let password_hash = self.hash_password(&command.password)?;
        let now = Utc::now();

        let volunteer = Volunteer {
            id: VolunteerId::new(),
            name: command.name,
            email: command.email,
            phone: command.phone,
            address: command.address,
            skills: command.skills,
            hours: Hours::ZERO,
            status: command.status,
            join_date: command.join_date.unwrap_or(now),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(volunteer).await?;
        tracing::info!(volunteer_id = %created.id, "Volunteer created");

        Ok(created)
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, VolunteerError> {
        self.repository.list_all().await
    }

    async fn update_volunteer(
        &self,
        id: &VolunteerId,
        command: UpdateVolunteerCommand,
    ) -> Result<Volunteer, VolunteerError> {
        let mut volunteer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(VolunteerError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            volunteer.name = name;
        }
        if let Some(email) = command.email {
            volunteer.email = email;
        }
        if let Some(phone) = command.phone {
            volunteer.phone = phone;
        }
        if let Some(address) = command.address {
            volunteer.address = Some(address);
        }
        if let Some(skills) = command.skills {
            volunteer.skills = Some(skills);
        }
        if let Some(status) = command.status {
            volunteer.status = status;
        }
        if let Some(password) = command.password {
            volunteer.password_hash = self.hash_password(&password)?;
        }
        volunteer.updated_at = Utc::now();

        self.repository.update(volunteer, command.hours).await
    }

    async fn delete_volunteer(&self, id: &VolunteerId) -> Result<(), VolunteerError> {
        self.repository.delete(id).await?;
        tracing::info!(volunteer_id = %id, "Volunteer deleted");

        Ok(())
    }
}
