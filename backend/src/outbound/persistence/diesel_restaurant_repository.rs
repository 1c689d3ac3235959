//! PostgreSQL-backed `RestaurantRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RestaurantRepository, StoreError};
use crate::domain::{NewRestaurant, Restaurant, RestaurantCriteria, RestaurantId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRestaurantRow, RestaurantRow};
use super::pool::DbPool;
use super::schema::restaurants;

/// Diesel-backed restaurant store.
#[derive(Clone)]
pub struct DieselRestaurantRepository {
    pool: DbPool,
}

impl DieselRestaurantRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for DieselRestaurantRepository {
    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(restaurants::table)
            .values(NewRestaurantRow::from(&restaurant))
            .returning(RestaurantRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RestaurantRow> = restaurants::table
            .find(id.get())
            .select(RestaurantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Restaurant::from))
    }

    async fn list(&self, criteria: &RestaurantCriteria) -> Result<Vec<Restaurant>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = restaurants::table
            .select(RestaurantRow::as_select())
            .order(restaurants::id.asc())
            .into_boxed();
        if let Some(cuisine) = criteria.cuisine_type() {
            query = query.filter(restaurants::cuisine_type.eq(cuisine.to_owned()));
        }
        if let Some(flag) = criteria.is_hpb_healthy() {
            query = query.filter(restaurants::is_hpb_healthy.eq(flag));
        }

        let rows: Vec<RestaurantRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Restaurant::from).collect())
    }
}
