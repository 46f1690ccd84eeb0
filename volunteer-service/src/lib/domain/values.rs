use std::fmt;
use std::str::FromStr;

use crate::domain::errors::EmailError;
use crate::domain::errors::HoursError;
use crate::domain::errors::PhoneError;
use crate::domain::errors::TextError;

/// Declares a UUID-backed identifier type with parsing and display.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub ::uuid::Uuid);

        impl $name {
            /// Generate a new random identifier (UUID v4).
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Parse an identifier from its string form.
            ///
            /// # Errors
            /// * `InvalidFormat` - String is not a valid UUID
            pub fn from_string(s: &str) -> Result<Self, $crate::domain::errors::IdError> {
                ::uuid::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| $crate::domain::errors::IdError::InvalidFormat(e.to_string()))
            }

            pub fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

pub(crate) use uuid_id;

/// Email address type
///
/// Validated with an RFC 5322 parser and normalised to lowercase so lookups
/// and uniqueness are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 254;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `TooLong` - Longer than the RFC 5321 path limit
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        if email.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: email.len(),
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number value type
///
/// Keeps the number as typed; accepts digits, spaces and `+ - ( ) .`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MIN_LENGTH: usize = 7;
    const MAX_LENGTH: usize = 20;
    const MIN_DIGITS: usize = 7;

    /// # Errors
    /// * `InvalidLength` - Outside 7 to 20 characters after trimming
    /// * `InvalidCharacters` - Contains letters or other symbols
    /// * `TooFewDigits` - Fewer than 7 digits
    pub fn new(phone: String) -> Result<Self, PhoneError> {
        let phone = phone.trim().to_string();
        let length = phone.chars().count();

        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(PhoneError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'))
        {
            return Err(PhoneError::InvalidCharacters);
        }

        if phone.chars().filter(|c| c.is_ascii_digit()).count() < Self::MIN_DIGITS {
            return Err(PhoneError::TooFewDigits {
                min: Self::MIN_DIGITS,
            });
        }

        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Required, non-blank text such as a name, title or location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    const MAX_LENGTH: usize = 200;

    /// Trim and validate `value`; `field` names the input in error messages.
    ///
    /// # Errors
    /// * `Empty` - Blank after trimming
    /// * `TooLong` - More than 200 characters
    pub fn new(field: &'static str, value: String) -> Result<Self, TextError> {
        let value = value.trim().to_string();
        let length = value.chars().count();

        if length == 0 {
            Err(TextError::Empty { field })
        } else if length > Self::MAX_LENGTH {
            Err(TextError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Volunteered hours, finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Hours(f64);

impl Hours {
    pub const ZERO: Hours = Hours(0.0);

    pub fn new(hours: f64) -> Result<Self, HoursError> {
        if hours.is_finite() && hours >= 0.0 {
            Ok(Self(hours))
        } else {
            Err(HoursError::Invalid(hours))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
