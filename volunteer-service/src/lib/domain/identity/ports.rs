use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Admin;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::Session;
use crate::domain::identity::models::SignupAdminCommand;
use crate::domain::values::EmailAddress;
use crate::domain::volunteer::models::Volunteer;

/// Port for signup, login and refresh operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new admin and log them in.
    ///
    /// # Returns
    /// The created admin with a fresh token pair
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Another admin uses this email; nothing is created
    /// * `DatabaseError` - Database operation failed
    async fn signup_admin(&self, command: SignupAdminCommand)
        -> Result<Session<Admin>, IdentityError>;

    /// Log an admin in by email and password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn login_admin(&self, credentials: Credentials) -> Result<Session<Admin>, IdentityError>;

    /// Log a volunteer in by email and password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn login_volunteer(
        &self,
        credentials: Credentials,
    ) -> Result<Session<Volunteer>, IdentityError>;

    /// Exchange a refresh token for a new token pair.
    ///
    /// # Errors
    /// * `InvalidToken` - Token does not verify, has expired, or is not a refresh token
    async fn refresh(&self, refresh_token: &str) -> Result<auth::TokenPair, IdentityError>;
}

/// Persistence operations for admin accounts.
#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
    /// Persist a new admin.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, admin: Admin) -> Result<Admin, IdentityError>;

    /// Retrieve admin by email address.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>, IdentityError>;
}
