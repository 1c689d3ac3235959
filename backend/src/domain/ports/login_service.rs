//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to authenticate credentials without knowing
//! which store or hasher sits behind it.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the matching account.
    ///
    /// Unknown usernames and wrong passwords fail with the same
    /// `Unauthorized` error.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
