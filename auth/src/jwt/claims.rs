use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Role carried by a token and by the account it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Volunteer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Volunteer => "volunteer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purpose of a token. Only `Refresh` tokens may mint new pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => f.write_str("access"),
            TokenType::Refresh => f.write_str("refresh"),
        }
    }
}

/// The account a token pair is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: impl ToString, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.into(),
            role,
        }
    }
}

/// Signed token payload.
///
/// `sub`, `iat` and `exp` use their RFC 7519 names; `type` distinguishes
/// access tokens from refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account identifier
    pub sub: String,

    pub email: String,

    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Claims {
    /// Build claims for `identity`, valid from `issued_at` for `ttl`.
    pub fn for_identity(
        identity: &Identity,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: identity.user_id.clone(),
            email: identity.email.clone(),
            role: identity.role,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            token_type,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.sub
    }

    /// Recover the identity the token was issued for.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.sub.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    pub fn is_refresh(&self) -> bool {
        self.token_type == TokenType::Refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::new("user123", "alice@example.com", Role::Admin)
    }

    #[test]
    fn test_for_identity() {
        let issued_at = Utc::now();
        let claims = Claims::for_identity(
            &identity(),
            TokenType::Access,
            issued_at,
            Duration::hours(1),
        );

        assert_eq!(claims.user_id(), "user123");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 60 * 60);
        assert!(!claims.is_refresh());
    }

    #[test]
    fn test_identity_round_trip() {
        let claims = Claims::for_identity(
            &identity(),
            TokenType::Refresh,
            Utc::now(),
            Duration::days(7),
        );

        assert_eq!(claims.identity(), identity());
        assert!(claims.is_refresh());
    }

    #[test]
    fn test_wire_names() {
        let claims = Claims::for_identity(
            &Identity::new("v-1", "vol@example.com", Role::Volunteer),
            TokenType::Refresh,
            Utc::now(),
            Duration::days(7),
        );

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"], "v-1");
        assert_eq!(value["role"], "volunteer");
        assert_eq!(value["type"], "refresh");
        assert!(value["iat"].is_i64());
        assert!(value["exp"].is_i64());
    }
}
