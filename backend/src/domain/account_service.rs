//! Account domain service: registration, login and profile lookup.
//!
//! Password hashing is CPU bound, so hasher calls run on the blocking pool
//! with the request's trace id carried across.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    LoginService, PasswordHashError, PasswordHasher, RegistrationService, UserProfileQuery,
    UserRepository,
};
use crate::domain::{Error, LoginCredentials, NewUser, PasswordHash, TraceId, User, UserId};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Account service over a user store and a password hasher.
#[derive(Clone)]
pub struct AccountService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AccountService<U, H> {
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    warn!(%error, "password hasher failed");
    Error::internal("password processing failed")
}

impl<U, H> AccountService<U, H>
where
    H: PasswordHasher + 'static,
{
    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        TraceId::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(map_hash_error)
    }

    async fn verify_password(&self, password: &str, hash: PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        TraceId::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))?
            .map_err(map_hash_error)
    }
}

#[async_trait]
impl<U, H> RegistrationService for AccountService<U, H>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let password_hash = self.hash_password(credentials.password()).await?;
        let user = self
            .users
            .create(NewUser {
                username: credentials.username().clone(),
                password_hash,
            })
            .await?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<U, H> LoginService for AccountService<U, H>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let Some(user) = self.users.find_by_username(credentials.username()).await? else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        let verified = self
            .verify_password(credentials.password(), user.password_hash().clone())
            .await?;
        if verified {
            Ok(user)
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}

#[async_trait]
impl<U, H> UserProfileQuery for AccountService<U, H>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn fetch_profile(&self, user_id: UserId) -> Result<User, Error> {
        // A session can outlive its account when the in-memory store restarts.
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::unauthorized("session user no longer exists"))
    }
}
