use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::Identity;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenType;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Validity windows for issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl TokenLifetimes {
    pub fn from_secs(access_secs: i64, refresh_secs: i64) -> Self {
        Self {
            access: Duration::seconds(access_secs),
            refresh: Duration::seconds(refresh_secs),
        }
    }
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            access: Duration::hours(1),
            refresh: Duration::days(7),
        }
    }
}

/// Access/refresh token pair handed to a client after login, signup or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the signing secret and token lifetimes; built once at startup and
/// shared read-only between requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    lifetimes: TokenLifetimes,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Expected a {expected} token, got a {found} token")]
    WrongTokenType {
        expected: TokenType,
        found: TokenType,
    },

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator with the default lifetimes (1 hour / 7 days).
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_lifetimes(jwt_secret, TokenLifetimes::default())
    }

    pub fn with_lifetimes(jwt_secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            lifetimes,
        }
    }

    pub fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &Identity,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_tokens(identity)?)
    }

    /// Issue an access/refresh pair for `identity`, valid from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_tokens(&self, identity: &Identity) -> Result<TokenPair, JwtError> {
        self.issue_tokens_at(identity, Utc::now())
    }

    /// Issue an access/refresh pair whose validity window starts at `issued_at`.
    pub fn issue_tokens_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenPair, JwtError> {
        let access = Claims::for_identity(
            identity,
            TokenType::Access,
            issued_at,
            self.lifetimes.access,
        );
        let refresh = Claims::for_identity(
            identity,
            TokenType::Refresh,
            issued_at,
            self.lifetimes.refresh,
        );

        Ok(TokenPair {
            access_token: self.jwt_handler.encode(&access)?,
            refresh_token: self.jwt_handler.encode(&refresh)?,
        })
    }

    /// Validate and decode a token of either type.
    ///
    /// # Errors
    /// * `JwtError` - Signature mismatch, expiry, or malformed payload
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Exchange a refresh token for a fresh pair carrying the same identity.
    ///
    /// # Errors
    /// * `JwtError` - Token does not verify
    /// * `WrongTokenType` - Token verifies but is not a refresh token
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthenticationError> {
        let claims = self.validate_token(refresh_token)?;

        if !claims.is_refresh() {
            return Err(AuthenticationError::WrongTokenType {
                expected: TokenType::Refresh,
                found: claims.token_type,
            });
        }

        Ok(self.issue_tokens(&claims.identity())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::Role;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn identity() -> Identity {
        Identity::new("user123", "a@b.com", Role::Admin)
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let pair = authenticator
            .authenticate("my_password", &hash, &identity())
            .expect("Authentication failed");

        let access = authenticator
            .validate_token(&pair.access_token)
            .expect("Token validation failed");
        assert_eq!(access.user_id(), "user123");
        assert_eq!(access.token_type, TokenType::Access);
        assert_eq!(access.exp - access.iat, 60 * 60);

        let refresh = authenticator
            .validate_token(&pair.refresh_token)
            .expect("Token validation failed");
        assert_eq!(refresh.token_type, TokenType::Refresh);
        assert_eq!(refresh.exp - refresh.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, &identity());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.authenticate("my_password", "not-a-hash", &identity());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_access_token_validity_window() {
        let authenticator = Authenticator::new(SECRET);
        let ttl = authenticator.lifetimes().access;

        // Issued just under one TTL ago: still valid.
        let fresh = authenticator
            .issue_tokens_at(&identity(), Utc::now() - ttl + Duration::seconds(5))
            .expect("Failed to issue tokens");
        assert!(authenticator.validate_token(&fresh.access_token).is_ok());

        // Issued just over one TTL ago: expired.
        let stale = authenticator
            .issue_tokens_at(&identity(), Utc::now() - ttl - Duration::seconds(5))
            .expect("Failed to issue tokens");
        assert_eq!(
            authenticator
                .validate_token(&stale.access_token)
                .unwrap_err(),
            JwtError::TokenExpired
        );
    }

    #[test]
    fn test_refresh_token_validity_window() {
        let authenticator = Authenticator::with_lifetimes(SECRET, TokenLifetimes::from_secs(60, 600));

        let fresh = authenticator
            .issue_tokens_at(&identity(), Utc::now() - Duration::seconds(595))
            .expect("Failed to issue tokens");
        assert!(authenticator.validate_token(&fresh.refresh_token).is_ok());
        assert!(authenticator.validate_token(&fresh.access_token).is_err());

        let stale = authenticator
            .issue_tokens_at(&identity(), Utc::now() - Duration::seconds(605))
            .expect("Failed to issue tokens");
        assert!(authenticator.validate_token(&stale.refresh_token).is_err());
    }

    #[test]
    fn test_refresh_preserves_identity() {
        let authenticator = Authenticator::new(SECRET);
        let volunteer = Identity::new("vol-42", "vol@example.com", Role::Volunteer);

        let pair = authenticator
            .issue_tokens(&volunteer)
            .expect("Failed to issue tokens");

        let refreshed = authenticator
            .refresh(&pair.refresh_token)
            .expect("Refresh failed");

        let access = authenticator
            .validate_token(&refreshed.access_token)
            .expect("Token validation failed");
        assert_eq!(access.identity(), volunteer);
        assert_eq!(access.token_type, TokenType::Access);

        let refresh = authenticator
            .validate_token(&refreshed.refresh_token)
            .expect("Token validation failed");
        assert_eq!(refresh.identity(), volunteer);
        assert!(refresh.is_refresh());
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let authenticator = Authenticator::new(SECRET);
        let pair = authenticator
            .issue_tokens(&identity())
            .expect("Failed to issue tokens");

        let result = authenticator.refresh(&pair.access_token);
        assert!(matches!(
            result,
            Err(AuthenticationError::WrongTokenType {
                expected: TokenType::Refresh,
                found: TokenType::Access,
            })
        ));
    }

    #[test]
    fn test_refresh_rejects_foreign_and_expired_tokens() {
        let authenticator = Authenticator::new(SECRET);
        let other = Authenticator::new(b"another_secret_key_at_least_32_bytes");

        let foreign = other
            .issue_tokens(&identity())
            .expect("Failed to issue tokens");
        assert!(matches!(
            authenticator.refresh(&foreign.refresh_token),
            Err(AuthenticationError::JwtError(JwtError::InvalidSignature))
        ));

        let expired = authenticator
            .issue_tokens_at(&identity(), Utc::now() - Duration::days(8))
            .expect("Failed to issue tokens");
        assert!(matches!(
            authenticator.refresh(&expired.refresh_token),
            Err(AuthenticationError::JwtError(JwtError::TokenExpired))
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
