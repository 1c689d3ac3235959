//! Calorie-budget filter pipeline.
//!
//! A [`CalorieFilter`] is validated eagerly; [`filter_restaurants`] then
//! lists matching restaurants and attaches the menu items under the limit,
//! dropping restaurants with nothing to recommend.

use futures_util::future::try_join_all;
use serde::Serialize;
use utoipa::ToSchema;

use super::ports::{MenuItemRepository, RestaurantRepository, StoreError};
use super::{MenuItem, Restaurant, RestaurantCriteria};

/// Smallest accepted calorie limit.
pub const MIN_CALORIE_LIMIT: f64 = 500.0;
/// Largest accepted calorie limit.
pub const MAX_CALORIE_LIMIT: f64 = 3000.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalorieFilterError {
    #[error("limit must be a finite number")]
    NonFinite,
    #[error("limit must be between {min} and {max}, got {actual}")]
    OutOfRange { min: f64, max: f64, actual: f64 },
}

/// Validated filter request.
///
/// ## Invariants
/// - `limit` lies in `[500, 3000]`; fractional limits are floored, which is
///   equivalent for integer calorie counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalorieFilter {
    limit: i32,
    criteria: RestaurantCriteria,
}

impl CalorieFilter {
    /// # Examples
    /// ```
    /// use eatinery::domain::CalorieFilter;
    ///
    /// let filter = CalorieFilter::try_new(420.0, Some("Korean".into()), None);
    /// assert!(filter.is_err());
    /// let filter = CalorieFilter::try_new(650.5, Some("Korean".into()), None).expect("valid");
    /// assert_eq!(filter.limit(), 650);
    /// ```
    pub fn try_new(
        limit: f64,
        cuisine_type: Option<String>,
        is_hpb_healthy: Option<bool>,
    ) -> Result<Self, CalorieFilterError> {
        if !limit.is_finite() {
            return Err(CalorieFilterError::NonFinite);
        }
        if !(MIN_CALORIE_LIMIT..=MAX_CALORIE_LIMIT).contains(&limit) {
            return Err(CalorieFilterError::OutOfRange {
                min: MIN_CALORIE_LIMIT,
                max: MAX_CALORIE_LIMIT,
                actual: limit,
            });
        }
        Ok(Self {
            // In range, so the cast cannot truncate.
            limit: limit.floor() as i32,
            criteria: RestaurantCriteria::new(cuisine_type, is_hpb_healthy),
        })
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn criteria(&self) -> &RestaurantCriteria {
        &self.criteria
    }
}

/// A restaurant together with the menu items that fit the filter.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantWithMenu {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub recommended_menu_items: Vec<MenuItem>,
}

/// Run the filter pipeline against the stores.
///
/// `ceiling` is an inclusive calorie bound and is not range checked here;
/// request bounds belong to [`CalorieFilter`]. Menu lookups run
/// concurrently; results keep the restaurant store order.
pub async fn filter_restaurants(
    restaurants: &dyn RestaurantRepository,
    menu_items: &dyn MenuItemRepository,
    criteria: &RestaurantCriteria,
    ceiling: i32,
) -> Result<Vec<RestaurantWithMenu>, StoreError> {
    let candidates = restaurants.list(criteria).await?;
    let lookups = candidates.into_iter().map(|restaurant| async move {
        let items = menu_items
            .list_for_restaurant(restaurant.id, Some(ceiling))
            .await?;
        Ok::<_, StoreError>((restaurant, items))
    });
    let results = try_join_all(lookups).await?;
    Ok(results
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(restaurant, recommended_menu_items)| RestaurantWithMenu {
            restaurant,
            recommended_menu_items,
        })
        .collect())
}
