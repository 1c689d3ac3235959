//! In-memory store implementing every repository port.
//!
//! Tables are `BTreeMap`s keyed by identifier behind a single `RwLock`, so
//! iteration order is ascending identifier (insertion order). Identifiers
//! come from per-table [`IdSequence`]s that start at 1 and never reuse a
//! value, even when an insert is rejected after the id was drawn.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    MenuItemRepository, RestaurantRepository, StoreError, UserRepository,
    WalkingDirectionRepository,
};
use crate::domain::{
    MenuItem, MenuItemId, NewMenuItem, NewRestaurant, NewUser, NewWalkingDirection, Restaurant,
    RestaurantCriteria, RestaurantId, User, UserId, Username, WalkingDirection, WalkingDirectionId,
};

/// Monotonic identifier source for one table.
#[derive(Debug)]
pub struct IdSequence(AtomicI32);

impl IdSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicI32::new(1))
    }

    /// Draw the next identifier.
    pub fn next(&self) -> i32 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct Tables {
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    menu_items: BTreeMap<MenuItemId, MenuItem>,
    directions: BTreeMap<WalkingDirectionId, WalkingDirection>,
    users: BTreeMap<UserId, User>,
}

/// Process-local data store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    restaurant_ids: IdSequence,
    menu_item_ids: IdSequence,
    direction_ids: IdSequence,
    user_ids: IdSequence,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::query("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryStore {
    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, StoreError> {
        let mut tables = self.write()?;
        let id = RestaurantId::new(self.restaurant_ids.next());
        let record = Restaurant::from_new(id, restaurant);
        tables.restaurants.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, StoreError> {
        Ok(self.read()?.restaurants.get(&id).cloned())
    }

    async fn list(&self, criteria: &RestaurantCriteria) -> Result<Vec<Restaurant>, StoreError> {
        Ok(self
            .read()?
            .restaurants
            .values()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryStore {
    async fn create(
        &self,
        restaurant_id: RestaurantId,
        item: NewMenuItem,
    ) -> Result<MenuItem, StoreError> {
        let mut tables = self.write()?;
        if !tables.restaurants.contains_key(&restaurant_id) {
            return Err(StoreError::missing_restaurant(restaurant_id.get()));
        }
        let id = MenuItemId::new(self.menu_item_ids.next());
        let record = MenuItem::from_new(id, restaurant_id, item);
        tables.menu_items.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        Ok(self.read()?.menu_items.get(&id).cloned())
    }

    async fn list_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
        ceiling: Option<i32>,
    ) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self
            .read()?
            .menu_items
            .values()
            .filter(|item| item.restaurant_id == restaurant_id && item.within(ceiling))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WalkingDirectionRepository for InMemoryStore {
    async fn create(
        &self,
        restaurant_id: RestaurantId,
        directions: NewWalkingDirection,
    ) -> Result<WalkingDirection, StoreError> {
        let mut tables = self.write()?;
        if !tables.restaurants.contains_key(&restaurant_id) {
            return Err(StoreError::missing_restaurant(restaurant_id.get()));
        }
        if tables
            .directions
            .values()
            .any(|d| d.restaurant_id == restaurant_id)
        {
            return Err(StoreError::duplicate_directions(restaurant_id.get()));
        }
        let id = WalkingDirectionId::new(self.direction_ids.next());
        let record = WalkingDirection::from_new(id, restaurant_id, directions);
        tables.directions.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(
        &self,
        id: WalkingDirectionId,
    ) -> Result<Option<WalkingDirection>, StoreError> {
        Ok(self.read()?.directions.get(&id).cloned())
    }

    async fn find_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Option<WalkingDirection>, StoreError> {
        Ok(self
            .read()?
            .directions
            .values()
            .find(|d| d.restaurant_id == restaurant_id)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.write()?;
        if tables.users.values().any(|u| u.username() == &user.username) {
            return Err(StoreError::duplicate_username(user.username.to_string()));
        }
        let id = UserId::new(self.user_ids.next());
        let record = User::from_new(id, user);
        tables.users.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }
}
