//! Driving port for restaurant read use-cases.
//!
//! HTTP handlers depend on this trait rather than on the stores, so the
//! same handlers run against the in-memory and relational adapters.

use async_trait::async_trait;

use crate::domain::{
    CalorieFilter, Error, MenuItem, Restaurant, RestaurantCriteria, RestaurantId,
    RestaurantWithMenu, WalkingDirection,
};

#[async_trait]
pub trait RestaurantQuery: Send + Sync {
    /// Restaurants matching `criteria`, in store order.
    async fn list_restaurants(&self, criteria: &RestaurantCriteria)
    -> Result<Vec<Restaurant>, Error>;

    /// A single restaurant; `NotFound` when unknown.
    async fn restaurant(&self, id: RestaurantId) -> Result<Restaurant, Error>;

    /// Menu of a known restaurant, optionally capped by calories.
    async fn menu(&self, id: RestaurantId, ceiling: Option<i32>) -> Result<Vec<MenuItem>, Error>;

    /// Walking directions; `NotFound` when the restaurant or its directions
    /// are missing.
    async fn directions(&self, id: RestaurantId) -> Result<WalkingDirection, Error>;

    /// Restaurants with at least one menu item under the filter limit.
    async fn filter(&self, filter: &CalorieFilter) -> Result<Vec<RestaurantWithMenu>, Error>;
}
