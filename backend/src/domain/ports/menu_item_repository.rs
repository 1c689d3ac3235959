//! Driven port for menu item storage.

use async_trait::async_trait;

use crate::domain::{MenuItem, MenuItemId, NewMenuItem, RestaurantId};

use super::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Insert an item under `restaurant_id`.
    ///
    /// Fails with [`StoreError::MissingRestaurant`] when the restaurant does
    /// not exist.
    async fn create(
        &self,
        restaurant_id: RestaurantId,
        item: NewMenuItem,
    ) -> Result<MenuItem, StoreError>;

    async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError>;

    /// Items for one restaurant in identifier order, keeping only those with
    /// `calories <= ceiling` when a ceiling is given.
    async fn list_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
        ceiling: Option<i32>,
    ) -> Result<Vec<MenuItem>, StoreError>;
}
