//! Driven port for walking direction storage.

use async_trait::async_trait;

use crate::domain::{NewWalkingDirection, RestaurantId, WalkingDirection, WalkingDirectionId};

use super::StoreError;

/// Walking direction persistence; at most one record per restaurant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalkingDirectionRepository: Send + Sync {
    /// Store directions for a restaurant.
    ///
    /// Fails with [`StoreError::MissingRestaurant`] for unknown restaurants
    /// and [`StoreError::DuplicateDirections`] when directions already exist.
    async fn create(
        &self,
        restaurant_id: RestaurantId,
        directions: NewWalkingDirection,
    ) -> Result<WalkingDirection, StoreError>;

    async fn find_by_id(
        &self,
        id: WalkingDirectionId,
    ) -> Result<Option<WalkingDirection>, StoreError>;

    async fn find_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Option<WalkingDirection>, StoreError>;
}
