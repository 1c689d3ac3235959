//! Driving port for account sign-up.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account; `Conflict` when the username is taken.
    async fn register(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
