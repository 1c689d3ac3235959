//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{
    DirectionStep, MenuItem, MenuItemId, NewMenuItem, NewRestaurant, PasswordHash, Restaurant,
    RestaurantId, User, UserId, Username, WalkingDirection, WalkingDirectionId,
};

use super::schema::{menu_items, restaurants, users, walking_directions};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RestaurantRow {
    pub id: i32,
    pub name: String,
    pub cuisine_type: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub is_hpb_healthy: bool,
    pub image_url: Option<String>,
    pub opening_hours: Option<String>,
    pub address: Option<String>,
    pub distance_in_meters: Option<i32>,
    pub walk_time_minutes: Option<i32>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            id: RestaurantId::new(row.id),
            name: row.name,
            cuisine_type: row.cuisine_type,
            location: row.location,
            latitude: row.latitude,
            longitude: row.longitude,
            rating: row.rating,
            is_hpb_healthy: row.is_hpb_healthy,
            image_url: row.image_url,
            opening_hours: row.opening_hours,
            address: row.address,
            distance_in_meters: row.distance_in_meters,
            walk_time_minutes: row.walk_time_minutes,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = restaurants)]
pub(crate) struct NewRestaurantRow<'a> {
    pub name: &'a str,
    pub cuisine_type: &'a str,
    pub location: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub is_hpb_healthy: bool,
    pub image_url: Option<&'a str>,
    pub opening_hours: Option<&'a str>,
    pub address: Option<&'a str>,
    pub distance_in_meters: Option<i32>,
    pub walk_time_minutes: Option<i32>,
}

impl<'a> From<&'a NewRestaurant> for NewRestaurantRow<'a> {
    fn from(value: &'a NewRestaurant) -> Self {
        Self {
            name: &value.name,
            cuisine_type: &value.cuisine_type,
            location: &value.location,
            latitude: value.latitude,
            longitude: value.longitude,
            rating: value.rating,
            is_hpb_healthy: value.is_hpb_healthy,
            image_url: value.image_url.as_deref(),
            opening_hours: value.opening_hours.as_deref(),
            address: value.address.as_deref(),
            distance_in_meters: value.distance_in_meters,
            walk_time_minutes: value.walk_time_minutes,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MenuItemRow {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub calories: i32,
    pub price: Option<f64>,
    pub protein: Option<i32>,
    pub carbs: Option<i32>,
    pub fat: Option<i32>,
    pub image_url: Option<String>,
    pub is_healthy: bool,
    pub tags: Vec<String>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            id: MenuItemId::new(row.id),
            restaurant_id: RestaurantId::new(row.restaurant_id),
            name: row.name,
            description: row.description,
            calories: row.calories,
            price: row.price,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
            image_url: row.image_url,
            is_healthy: row.is_healthy,
            tags: row.tags,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = menu_items)]
pub(crate) struct NewMenuItemRow<'a> {
    pub restaurant_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub calories: i32,
    pub price: Option<f64>,
    pub protein: Option<i32>,
    pub carbs: Option<i32>,
    pub fat: Option<i32>,
    pub image_url: Option<&'a str>,
    pub is_healthy: bool,
    pub tags: &'a [String],
}

impl<'a> NewMenuItemRow<'a> {
    pub fn new(restaurant_id: RestaurantId, item: &'a NewMenuItem) -> Self {
        Self {
            restaurant_id: restaurant_id.get(),
            name: &item.name,
            description: item.description.as_deref(),
            calories: item.calories,
            price: item.price,
            protein: item.protein,
            carbs: item.carbs,
            fat: item.fat,
            image_url: item.image_url.as_deref(),
            is_healthy: item.is_healthy,
            tags: &item.tags,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = walking_directions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WalkingDirectionRow {
    pub id: i32,
    pub restaurant_id: i32,
    pub steps: serde_json::Value,
    pub total_distance_meters: i32,
    pub total_time_minutes: i32,
    pub calories_burned: i32,
}

impl TryFrom<WalkingDirectionRow> for WalkingDirection {
    type Error = serde_json::Error;

    fn try_from(row: WalkingDirectionRow) -> Result<Self, Self::Error> {
        let steps: Vec<DirectionStep> = serde_json::from_value(row.steps)?;
        Ok(Self {
            id: WalkingDirectionId::new(row.id),
            restaurant_id: RestaurantId::new(row.restaurant_id),
            steps,
            total_distance_meters: row.total_distance_meters,
            total_time_minutes: row.total_time_minutes,
            calories_burned: row.calories_burned,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = walking_directions)]
pub(crate) struct NewWalkingDirectionRow {
    pub restaurant_id: i32,
    pub steps: serde_json::Value,
    pub total_distance_meters: i32,
    pub total_time_minutes: i32,
    pub calories_burned: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub password: String,
}

impl TryFrom<UserRow> for User {
    type Error = crate::domain::UsernameValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User::new(
            UserId::new(row.id),
            Username::new(row.username)?,
            PasswordHash::new(row.password),
        ))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
