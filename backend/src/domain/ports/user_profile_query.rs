//! Driving port for reading the signed-in user.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the account for the authenticated user.
    async fn fetch_profile(&self, user_id: UserId) -> Result<User, Error>;
}
