//! Restaurant catalogue domain service.
//!
//! Implements [`RestaurantQuery`] and [`RestaurantCommand`] over the
//! restaurant, menu and directions stores.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::calorie_filter::filter_restaurants;
use crate::domain::ports::{
    MenuItemRepository, RestaurantCommand, RestaurantQuery, RestaurantRepository,
    WalkingDirectionRepository,
};
use crate::domain::{
    CalorieFilter, Error, MenuItem, NewMenuItem, NewRestaurant, NewWalkingDirection, Restaurant,
    RestaurantCriteria, RestaurantId, RestaurantWithMenu, WalkingDirection,
};

/// Catalogue service backed by three stores.
#[derive(Clone)]
pub struct RestaurantCatalogueService<R, M, W> {
    restaurants: Arc<R>,
    menu_items: Arc<M>,
    directions: Arc<W>,
}

impl<R, M, W> RestaurantCatalogueService<R, M, W> {
    pub fn new(restaurants: Arc<R>, menu_items: Arc<M>, directions: Arc<W>) -> Self {
        Self {
            restaurants,
            menu_items,
            directions,
        }
    }
}

fn invalid_field(field: &'static str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": "invalid_value",
    }))
}

fn restaurant_not_found(id: RestaurantId) -> Error {
    Error::not_found(format!("restaurant {id} not found"))
}

impl<R, M, W> RestaurantCatalogueService<R, M, W>
where
    R: RestaurantRepository,
    M: MenuItemRepository,
    W: WalkingDirectionRepository,
{
    async fn require_restaurant(&self, id: RestaurantId) -> Result<Restaurant, Error> {
        self.restaurants
            .find_by_id(id)
            .await?
            .ok_or_else(|| restaurant_not_found(id))
    }
}

#[async_trait]
impl<R, M, W> RestaurantQuery for RestaurantCatalogueService<R, M, W>
where
    R: RestaurantRepository + 'static,
    M: MenuItemRepository + 'static,
    W: WalkingDirectionRepository + 'static,
{
    async fn list_restaurants(
        &self,
        criteria: &RestaurantCriteria,
    ) -> Result<Vec<Restaurant>, Error> {
        Ok(self.restaurants.list(criteria).await?)
    }

    async fn restaurant(&self, id: RestaurantId) -> Result<Restaurant, Error> {
        self.require_restaurant(id).await
    }

    async fn menu(&self, id: RestaurantId, ceiling: Option<i32>) -> Result<Vec<MenuItem>, Error> {
        self.require_restaurant(id).await?;
        Ok(self.menu_items.list_for_restaurant(id, ceiling).await?)
    }

    async fn directions(&self, id: RestaurantId) -> Result<WalkingDirection, Error> {
        self.directions
            .find_for_restaurant(id)
            .await?
            .ok_or_else(|| {
                Error::not_found(format!("walking directions for restaurant {id} not found"))
            })
    }

    async fn filter(&self, filter: &CalorieFilter) -> Result<Vec<RestaurantWithMenu>, Error> {
        let results = filter_restaurants(
            self.restaurants.as_ref(),
            self.menu_items.as_ref(),
            filter.criteria(),
            filter.limit(),
        )
        .await?;
        debug!(
            limit = filter.limit(),
            matches = results.len(),
            "calorie filter evaluated"
        );
        Ok(results)
    }
}

#[async_trait]
impl<R, M, W> RestaurantCommand for RestaurantCatalogueService<R, M, W>
where
    R: RestaurantRepository + 'static,
    M: MenuItemRepository + 'static,
    W: WalkingDirectionRepository + 'static,
{
    async fn create_restaurant(&self, restaurant: NewRestaurant) -> Result<Restaurant, Error> {
        restaurant
            .validate()
            .map_err(|err| invalid_field(err.field(), err.to_string()))?;
        let created = self
            .restaurants
            .create(restaurant.with_walk_estimate())
            .await?;
        info!(restaurant_id = %created.id, name = %created.name, "restaurant created");
        Ok(created)
    }

    async fn add_menu_item(
        &self,
        restaurant_id: RestaurantId,
        item: NewMenuItem,
    ) -> Result<MenuItem, Error> {
        item.validate()
            .map_err(|err| invalid_field(err.field(), err.to_string()))?;
        Ok(self.menu_items.create(restaurant_id, item).await?)
    }

    async fn add_directions(
        &self,
        restaurant_id: RestaurantId,
        directions: NewWalkingDirection,
    ) -> Result<WalkingDirection, Error> {
        Ok(self.directions.create(restaurant_id, directions).await?)
    }
}
