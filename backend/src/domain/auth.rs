//! Login and registration credentials.
//!
//! Handlers parse raw strings into [`LoginCredentials`] before calling a
//! port, so services never see unvalidated input.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{Username, UsernameValidationError};

/// Validation failures for credential payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    InvalidUsername(UsernameValidationError),
    EmptyPassword,
}

impl LoginValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidUsername(_) => "username",
            Self::EmptyPassword => "password",
        }
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsername(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated username/password pair.
///
/// ## Invariants
/// - `username` satisfies [`Username`] rules.
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use eatinery::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" alice ", "hunter2").expect("valid");
/// assert_eq!(creds.username().as_ref(), "alice");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = Username::new(username).map_err(LoginValidationError::InvalidUsername)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
