use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Admin;
use crate::domain::identity::models::AdminId;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::Session;
use crate::domain::identity::models::SignupAdminCommand;
use crate::domain::identity::ports::AdminRepository;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::volunteer::models::Volunteer;
use crate::domain::volunteer::ports::VolunteerRepository;

/// Signup, login and refresh on top of the shared `Authenticator`.
///
/// Unknown emails and wrong passwords both surface as `InvalidCredentials`.
pub struct AuthService<AR, VR>
where
    AR: AdminRepository,
    VR: VolunteerRepository,
{
    admins: Arc<AR>,
    volunteers: Arc<VR>,
    authenticator: Arc<Authenticator>,
}

impl<AR, VR> AuthService<AR, VR>
where
    AR: AdminRepository,
    VR: VolunteerRepository,
{
    pub fn new(admins: Arc<AR>, volunteers: Arc<VR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            admins,
            volunteers,
            authenticator,
        }
    }

    fn issue_session<T>(
        &self,
        account: T,
        password: &str,
        stored_hash: &str,
        identity: &auth::Identity,
    ) -> Result<Session<T>, IdentityError> {
        let tokens = self
            .authenticator
            .authenticate(password, stored_hash, identity)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => IdentityError::InvalidCredentials,
                other => IdentityError::Unknown(format!("Token generation failed: {}", other)),
            })?;

        Ok(Session { account, tokens })
    }
}

#[async_trait]
impl<AR, VR> AuthServicePort for AuthService<AR, VR>
where
    AR: AdminRepository,
    VR: VolunteerRepository,
{
    async fn signup_admin(
        &self,
        command: SignupAdminCommand,
    ) -> Result<Session<Admin>, IdentityError> {
        if command.password.is_empty() {
            return Err(IdentityError::MissingPassword);
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| IdentityError::Unknown(e.to_string()))?;

        let admin = Admin {
            id: AdminId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let admin = self.admins.create(admin).await?;
        tracing::info!(admin_id = %admin.id, "Admin signed up");

        let tokens = self
            .authenticator
            .issue_tokens(&admin.identity())
            .map_err(|e| IdentityError::Unknown(format!("Token generation failed: {}", e)))?;

        Ok(Session {
            account: admin,
            tokens,
        })
    }

    async fn login_admin(&self, credentials: Credentials) -> Result<Session<Admin>, IdentityError> {
        let admin = self
            .admins
            .find_by_email(&credentials.email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let identity = admin.identity();
        let stored_hash = admin.password_hash.clone();
        let session = self.issue_session(admin, &credentials.password, &stored_hash, &identity)?;
        tracing::info!(admin_id = %session.account.id, "Admin logged in");

        Ok(session)
    }

    async fn login_volunteer(
        &self,
        credentials: Credentials,
    ) -> Result<Session<Volunteer>, IdentityError> {
        let volunteer = self
            .volunteers
            .find_by_email(&credentials.email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let identity = volunteer.identity();
        let stored_hash = volunteer.password_hash.clone();
        let session =
            self.issue_session(volunteer, &credentials.password, &stored_hash, &identity)?;
        tracing::info!(volunteer_id = %session.account.id, "Volunteer logged in");

        Ok(session)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<auth::TokenPair, IdentityError> {
        self.authenticator.refresh(refresh_token).map_err(|e| {
            tracing::warn!(error = %e, "Token refresh rejected");
            match e {
                AuthenticationError::JwtError(auth::JwtError::EncodingFailed(msg)) => {
                    IdentityError::Unknown(msg)
                }
                other => IdentityError::InvalidToken(other.to_string()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::values::EmailAddress;
    use crate::domain::values::RequiredText;
    use crate::domain::volunteer::service::tests::sample_volunteer;
    use crate::domain::volunteer::service::tests::MockTestVolunteerRepository;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestAdminRepository {}

        #[async_trait]
        impl AdminRepository for TestAdminRepository {
            async fn create(&self, admin: Admin) -> Result<Admin, IdentityError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>, IdentityError>;
        }
    }

    fn email(raw: &str) -> EmailAddress {
        EmailAddress::new(raw.to_string()).unwrap()
    }

    fn service(
        admins: MockTestAdminRepository,
        volunteers: MockTestVolunteerRepository,
    ) -> AuthService<MockTestAdminRepository, MockTestVolunteerRepository> {
        AuthService::new(
            Arc::new(admins),
            Arc::new(volunteers),
            Arc::new(Authenticator::new(SECRET)),
        )
    }

    fn stored_admin(password: &str) -> Admin {
        Admin {
            id: AdminId::new(),
            name: RequiredText::new("name", "A".to_string()).unwrap(),
            email: email("a@b.com"),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_signup_admin_issues_tokens() {
        let mut admins = MockTestAdminRepository::new();
        admins
            .expect_create()
            .withf(|admin| admin.email.as_str() == "a@b.com" && admin.password_hash.starts_with("$argon2"))
            .times(1)
            .returning(|admin| Ok(admin));

        let service = service(admins, MockTestVolunteerRepository::new());

        let session = service
            .signup_admin(SignupAdminCommand {
                name: RequiredText::new("name", "A".to_string()).unwrap(),
                email: email("a@b.com"),
                password: "x".to_string(),
            })
            .await
            .unwrap();

        let claims = Authenticator::new(SECRET)
            .validate_token(&session.tokens.access_token)
            .unwrap();
        assert_eq!(claims.user_id(), session.account.id.to_string());
        assert_eq!(claims.role, auth::Role::Admin);
        assert_eq!(claims.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_signup_admin_duplicate_email() {
        let mut admins = MockTestAdminRepository::new();
        admins
            .expect_create()
            .times(1)
            .returning(|admin| Err(IdentityError::EmailAlreadyExists(admin.email.to_string())));

        let service = service(admins, MockTestVolunteerRepository::new());

        let result = service
            .signup_admin(SignupAdminCommand {
                name: RequiredText::new("name", "A".to_string()).unwrap(),
                email: email("a@b.com"),
                password: "x".to_string(),
            })
            .await;
        assert!(matches!(result, Err(IdentityError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_signup_admin_requires_password() {
        let mut admins = MockTestAdminRepository::new();
        admins.expect_create().times(0);

        let service = service(admins, MockTestVolunteerRepository::new());

        let result = service
            .signup_admin(SignupAdminCommand {
                name: RequiredText::new("name", "A".to_string()).unwrap(),
                email: email("a@b.com"),
                password: String::new(),
            })
            .await;
        assert!(matches!(result, Err(IdentityError::MissingPassword)));
    }

    #[tokio::test]
    async fn test_login_admin_success() {
        let mut admins = MockTestAdminRepository::new();
        let admin = stored_admin("x");
        let admin_id = admin.id;
        admins
            .expect_find_by_email()
            .withf(|candidate| candidate.as_str() == "a@b.com")
            .times(1)
            .returning(move |_| Ok(Some(admin.clone())));

        let service = service(admins, MockTestVolunteerRepository::new());

        let session = service
            .login_admin(Credentials {
                email: email("a@b.com"),
                password: "x".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.account.id, admin_id);
        assert!(!session.tokens.access_token.is_empty());
        assert!(!session.tokens.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_admin_wrong_password() {
        let mut admins = MockTestAdminRepository::new();
        let admin = stored_admin("x");
        admins
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(admin.clone())));

        let service = service(admins, MockTestVolunteerRepository::new());

        let result = service
            .login_admin(Credentials {
                email: email("a@b.com"),
                password: "y".to_string(),
            })
            .await;
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_admin_unknown_email() {
        let mut admins = MockTestAdminRepository::new();
        admins
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(admins, MockTestVolunteerRepository::new());

        let result = service
            .login_admin(Credentials {
                email: email("nobody@b.com"),
                password: "x".to_string(),
            })
            .await;
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_volunteer_success() {
        let mut volunteers = MockTestVolunteerRepository::new();
        let hash = auth::PasswordHasher::new().hash("helping").unwrap();
        let volunteer = sample_volunteer(&hash);
        volunteers
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(volunteer.clone())));

        let service = service(MockTestAdminRepository::new(), volunteers);

        let session = service
            .login_volunteer(Credentials {
                email: email("jamie@example.com"),
                password: "helping".to_string(),
            })
            .await
            .unwrap();

        let claims = Authenticator::new(SECRET)
            .validate_token(&session.tokens.access_token)
            .unwrap();
        assert_eq!(claims.role, auth::Role::Volunteer);
        assert_eq!(claims.user_id(), session.account.id.to_string());
    }

    #[tokio::test]
    async fn test_login_volunteer_database_error() {
        let mut volunteers = MockTestVolunteerRepository::new();
        volunteers.expect_find_by_email().times(1).returning(|_| {
            Err(crate::domain::volunteer::errors::VolunteerError::DatabaseError(
                "connection refused".to_string(),
            ))
        });

        let service = service(MockTestAdminRepository::new(), volunteers);

        let result = service
            .login_volunteer(Credentials {
                email: email("jamie@example.com"),
                password: "helping".to_string(),
            })
            .await;
        assert!(matches!(result, Err(IdentityError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_refresh() {
        let service = service(
            MockTestAdminRepository::new(),
            MockTestVolunteerRepository::new(),
        );
        let identity = auth::Identity::new("abc", "a@b.com", auth::Role::Admin);
        let pair = Authenticator::new(SECRET).issue_tokens(&identity).unwrap();

        assert!(matches!(
            service.refresh(&pair.access_token).await,
            Err(IdentityError::InvalidToken(_))
        ));
        assert!(matches!(
            service.refresh("garbage").await,
            Err(IdentityError::InvalidToken(_))
        ));

        let renewed = service.refresh(&pair.refresh_token).await.unwrap();
        let claims = Authenticator::new(SECRET)
            .validate_token(&renewed.access_token)
            .unwrap();
        assert_eq!(claims.identity(), identity);
    }
}
