use async_trait::async_trait;

use crate::domain::values::EmailAddress;
use crate::domain::values::Hours;
use crate::domain::volunteer::errors::VolunteerError;
use crate::domain::volunteer::models::CreateVolunteerCommand;
use crate::domain::volunteer::models::UpdateVolunteerCommand;
use crate::domain::volunteer::models::Volunteer;
use crate::domain::volunteer::models::VolunteerId;

/// Port for volunteer domain service operations.
#[async_trait]
pub trait VolunteerServicePort: Send + Sync + 'static {
    /// Create a volunteer, hashing the supplied password.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_volunteer(
        &self,
        command: CreateVolunteerCommand,
    ) -> Result<Volunteer, VolunteerError>;

    /// List all volunteers, newest first.
    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, VolunteerError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Volunteer does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_volunteer(
        &self,
        id: &VolunteerId,
        command: UpdateVolunteerCommand,
    ) -> Result<Volunteer, VolunteerError>;

    /// Delete a volunteer together with their tasks and attendance.
    ///
    /// # Errors
    /// * `NotFound` - Volunteer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_volunteer(&self, id: &VolunteerId) -> Result<(), VolunteerError>;
}

/// Persistence operations for volunteer aggregate.
#[async_trait]
pub trait VolunteerRepository: Send + Sync + 'static {
    /// Persist new volunteer to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, volunteer: Volunteer) -> Result<Volunteer, VolunteerError>;

    /// Retrieve volunteer by identifier.
    async fn find_by_id(&self, id: &VolunteerId) -> Result<Option<Volunteer>, VolunteerError>;

    /// Retrieve volunteer by email address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Volunteer>, VolunteerError>;

    /// Retrieve all volunteers, newest first.
    async fn list_all(&self) -> Result<Vec<Volunteer>, VolunteerError>;

    /// Update existing volunteer in storage.
    ///
    /// `hours` replaces the stored total only when `Some`; otherwise the
    /// stored value is kept, so concurrent attendance credits are not lost.
    /// The returned volunteer carries the hours as persisted.
    ///
    /// # Errors
    /// * `NotFound` - Volunteer does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        volunteer: Volunteer,
        hours: Option<Hours>,
    ) -> Result<Volunteer, VolunteerError>;

    /// Remove volunteer from storage.
    ///
    /// # Errors
    /// * `NotFound` - Volunteer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &VolunteerId) -> Result<(), VolunteerError>;
}
