//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{StoreError, UserRepository};
use crate::domain::{NewUser, User, UserId, Username};

use super::diesel_error_mapping::{
    Violation, constraint_violation, map_diesel_error, map_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn decode(row: UserRow) -> Result<User, StoreError> {
    let id = row.id;
    User::try_from(row).map_err(|err| {
        warn!(user_id = id, error = %err, "stored username fails validation");
        StoreError::query("stored user record is invalid")
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(users::table)
            .values(NewUserRow {
                username: user.username.as_ref(),
                password: user.password_hash.as_str(),
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| match constraint_violation(&err) {
                Some(Violation::Unique) => StoreError::duplicate_username(user.username.as_ref()),
                _ => map_diesel_error(err),
            })?;

        decode(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(decode).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(decode).transpose()
    }
}
