//! Port abstraction for user account persistence.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, Username};

use super::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert an account; usernames are unique.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Fetch a user by exact username.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError>;
}
