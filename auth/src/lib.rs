//! Authentication core for the volunteer service.
//!
//! - Password hashing (Argon2id)
//! - Access/refresh token issuance and verification (HS256 JWT)
//! - Refresh flow coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Login and Refresh
//! ```
//! use auth::{Authenticator, Identity, Role, TokenType};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token pair
//! let identity = Identity::new("user123", "alice@example.com", Role::Admin);
//! let pair = auth.authenticate("password123", &hash, &identity).unwrap();
//!
//! // Gate: validate the access token
//! let claims = auth.validate_token(&pair.access_token).unwrap();
//! assert_eq!(claims.token_type, TokenType::Access);
//!
//! // Refresh: only refresh tokens mint new pairs
//! assert!(auth.refresh(&pair.access_token).is_err());
//! let renewed = auth.refresh(&pair.refresh_token).unwrap();
//! assert_eq!(auth.validate_token(&renewed.access_token).unwrap().identity(), identity);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenLifetimes;
pub use authenticator::TokenPair;
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::Role;
pub use jwt::TokenType;
pub use password::PasswordError;
pub use password::PasswordHasher;
