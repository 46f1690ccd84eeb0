use chrono::DateTime;
use chrono::Utc;

use crate::domain::values::uuid_id;
use crate::domain::values::EmailAddress;
use crate::domain::values::RequiredText;

uuid_id!(
    /// Admin unique identifier type
    AdminId
);

/// Administrator account.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub name: RequiredText,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Identity carried by tokens issued to this admin.
    pub fn identity(&self) -> auth::Identity {
        auth::Identity::new(self.id, self.email.as_str(), auth::Role::Admin)
    }
}

/// Command to register a new admin
#[derive(Debug)]
pub struct SignupAdminCommand {
    pub name: RequiredText,
    pub email: EmailAddress,
    pub password: String,
}

/// Email and plaintext password presented at login.
#[derive(Debug)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: String,
}

/// An authenticated account together with its freshly issued tokens.
#[derive(Debug, Clone)]
pub struct Session<T> {
    pub account: T,
    pub tokens: auth::TokenPair,
}
