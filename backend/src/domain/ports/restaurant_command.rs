//! Driving port for catalogue writes.

use async_trait::async_trait;

use crate::domain::{
    Error, MenuItem, NewMenuItem, NewRestaurant, NewWalkingDirection, Restaurant, RestaurantId,
    WalkingDirection,
};

#[async_trait]
pub trait RestaurantCommand: Send + Sync {
    /// Validate and store a restaurant, filling in distance and walk time
    /// from the reference origin when omitted.
    async fn create_restaurant(&self, restaurant: NewRestaurant) -> Result<Restaurant, Error>;

    async fn add_menu_item(
        &self,
        restaurant_id: RestaurantId,
        item: NewMenuItem,
    ) -> Result<MenuItem, Error>;

    async fn add_directions(
        &self,
        restaurant_id: RestaurantId,
        directions: NewWalkingDirection,
    ) -> Result<WalkingDirection, Error>;
}
