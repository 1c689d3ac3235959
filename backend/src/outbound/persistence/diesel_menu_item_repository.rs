//! PostgreSQL-backed `MenuItemRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MenuItemRepository, StoreError};
use crate::domain::{MenuItem, MenuItemId, NewMenuItem, RestaurantId};

use super::diesel_error_mapping::{
    Violation, constraint_violation, map_diesel_error, map_pool_error,
};
use super::models::{MenuItemRow, NewMenuItemRow};
use super::pool::DbPool;
use super::schema::menu_items;

#[derive(Clone)]
pub struct DieselMenuItemRepository {
    pool: DbPool,
}

impl DieselMenuItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for DieselMenuItemRepository {
    async fn create(
        &self,
        restaurant_id: RestaurantId,
        item: NewMenuItem,
    ) -> Result<MenuItem, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(menu_items::table)
            .values(NewMenuItemRow::new(restaurant_id, &item))
            .returning(MenuItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| match constraint_violation(&err) {
                Some(Violation::ForeignKey) => StoreError::missing_restaurant(restaurant_id.get()),
                _ => map_diesel_error(err),
            })?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MenuItemRow> = menu_items::table
            .find(id.get())
            .select(MenuItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(MenuItem::from))
    }

    async fn list_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
        ceiling: Option<i32>,
    ) -> Result<Vec<MenuItem>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = menu_items::table
            .filter(menu_items::restaurant_id.eq(restaurant_id.get()))
            .select(MenuItemRow::as_select())
            .order(menu_items::id.asc())
            .into_boxed();
        if let Some(limit) = ceiling {
            query = query.filter(menu_items::calories.le(limit));
        }

        let rows: Vec<MenuItemRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }
}
