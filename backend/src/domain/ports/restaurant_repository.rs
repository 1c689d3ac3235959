//! Driven port for restaurant storage.

use async_trait::async_trait;

use crate::domain::{NewRestaurant, Restaurant, RestaurantCriteria, RestaurantId};

use super::StoreError;

/// Restaurant persistence.
///
/// Listings are ordered by ascending identifier, which is insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Insert a restaurant and return it with its assigned identifier.
    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, StoreError>;

    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, StoreError>;

    /// Restaurants satisfying every filter in `criteria`.
    async fn list(&self, criteria: &RestaurantCriteria) -> Result<Vec<Restaurant>, StoreError>;
}
