//! PostgreSQL-backed `WalkingDirectionRepository` implementation.
//!
//! Steps live in a JSONB column; a unique index on `restaurant_id` enforces
//! one record per restaurant.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{StoreError, WalkingDirectionRepository};
use crate::domain::{NewWalkingDirection, RestaurantId, WalkingDirection, WalkingDirectionId};

use super::diesel_error_mapping::{
    Violation, constraint_violation, map_diesel_error, map_pool_error,
};
use super::models::{NewWalkingDirectionRow, WalkingDirectionRow};
use super::pool::DbPool;
use super::schema::walking_directions;

#[derive(Clone)]
pub struct DieselWalkingDirectionRepository {
    pool: DbPool,
}

impl DieselWalkingDirectionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn decode(row: WalkingDirectionRow) -> Result<WalkingDirection, StoreError> {
    let id = row.id;
    WalkingDirection::try_from(row).map_err(|err| {
        warn!(direction_id = id, error = %err, "stored direction steps are malformed");
        StoreError::query("stored direction steps are malformed")
    })
}

#[async_trait]
impl WalkingDirectionRepository for DieselWalkingDirectionRepository {
    async fn create(
        &self,
        restaurant_id: RestaurantId,
        directions: NewWalkingDirection,
    ) -> Result<WalkingDirection, StoreError> {
        let steps = serde_json::to_value(directions.steps())
            .map_err(|err| StoreError::query(format!("failed to encode steps: {err}")))?;
        let new_row = NewWalkingDirectionRow {
            restaurant_id: restaurant_id.get(),
            steps,
            total_distance_meters: directions.total_distance_meters(),
            total_time_minutes: directions.total_time_minutes(),
            calories_burned: directions.calories_burned(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(walking_directions::table)
            .values(&new_row)
            .returning(WalkingDirectionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| match constraint_violation(&err) {
                Some(Violation::Unique) => StoreError::duplicate_directions(restaurant_id.get()),
                Some(Violation::ForeignKey) => {
                    StoreError::missing_restaurant(restaurant_id.get())
                }
                None => map_diesel_error(err),
            })?;

        decode(row)
    }

    async fn find_by_id(
        &self,
        id: WalkingDirectionId,
    ) -> Result<Option<WalkingDirection>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WalkingDirectionRow> = walking_directions::table
            .find(id.get())
            .select(WalkingDirectionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(decode).transpose()
    }

    async fn find_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Option<WalkingDirection>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WalkingDirectionRow> = walking_directions::table
            .filter(walking_directions::restaurant_id.eq(restaurant_id.get()))
            .select(WalkingDirectionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(decode).transpose()
    }
}
