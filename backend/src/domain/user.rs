//! Registered user accounts.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Longest username accepted, in characters.
pub const USERNAME_MAX_CHARS: usize = 64;

/// Validation errors for [`Username`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidationError {
    Empty,
    TooLong { max: usize },
}

impl fmt::Display for UsernameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username must not be empty"),
            Self::TooLong { max } => write!(f, "username must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UsernameValidationError {}

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty login name.
///
/// # Examples
/// ```
/// use eatinery::domain::Username;
///
/// let name = Username::new("  alice ").expect("valid username");
/// assert_eq!(name.as_ref(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(value: impl AsRef<str>) -> Result<Self, UsernameValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        if trimmed.chars().count() > USERNAME_MAX_CHARS {
            return Err(UsernameValidationError::TooLong {
                max: USERNAME_MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Encoded password hash (PHC string). Never serialised.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(Zeroizing<String>);

impl PasswordHash {
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(Zeroizing::new(encoded.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Account awaiting a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    password_hash: PasswordHash,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, username: Username, password_hash: PasswordHash) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    #[must_use]
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self::new(id, new.username, new.password_hash)
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_usernames_are_rejected(#[case] raw: &str) {
        assert_eq!(Username::new(raw), Err(UsernameValidationError::Empty));
    }

    #[rstest]
    fn overlong_usernames_are_rejected() {
        let raw = "a".repeat(USERNAME_MAX_CHARS + 1);
        assert_eq!(
            Username::new(raw),
            Err(UsernameValidationError::TooLong {
                max: USERNAME_MAX_CHARS
            })
        );
    }

    #[rstest]
    fn username_at_limit_is_accepted() {
        let raw = "é".repeat(USERNAME_MAX_CHARS);
        assert!(Username::new(raw).is_ok());
    }

    #[rstest]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::new("$argon2id$v=19$secret");
        assert!(!format!("{hash:?}").contains("secret"));
    }
}
