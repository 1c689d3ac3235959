//! Restaurant records and the criteria used to select them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::geo::{Coordinates, WalkEstimate};

/// Store-assigned restaurant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct RestaurantId(i32);

impl RestaurantId {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures for [`NewRestaurant`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RestaurantValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must be a finite number")]
    NonFiniteCoordinate { field: &'static str },
    #[error("rating must be between 0 and 5, got {value}")]
    RatingOutOfRange { value: f64 },
    #[error("{field} must not be negative")]
    NegativeValue { field: &'static str },
}

impl RestaurantValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field }
            | Self::NonFiniteCoordinate { field }
            | Self::NegativeValue { field } => field,
            Self::RatingOutOfRange { .. } => "rating",
        }
    }
}

/// A restaurant ready to be inserted; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRestaurant {
    #[schema(example = "Seoul Garden")]
    pub name: String,
    #[schema(example = "Korean")]
    pub cuisine_type: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_hpb_healthy: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub distance_in_meters: Option<i32>,
    #[serde(default)]
    pub walk_time_minutes: Option<i32>,
}

impl NewRestaurant {
    /// Check field-level invariants before the record reaches a store.
    pub fn validate(&self) -> Result<(), RestaurantValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("cuisineType", &self.cuisine_type),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(RestaurantValidationError::EmptyField { field });
            }
        }
        for (field, value) in [("latitude", self.latitude), ("longitude", self.longitude)] {
            if !value.is_finite() {
                return Err(RestaurantValidationError::NonFiniteCoordinate { field });
            }
        }
        if let Some(rating) = self.rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(RestaurantValidationError::RatingOutOfRange { value: rating });
        }
        for (field, value) in [
            ("distanceInMeters", self.distance_in_meters),
            ("walkTimeMinutes", self.walk_time_minutes),
        ] {
            if value.is_some_and(|v| v < 0) {
                return Err(RestaurantValidationError::NegativeValue { field });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Fill in distance and walk time from the reference origin when absent.
    #[must_use]
    pub fn with_walk_estimate(mut self) -> Self {
        if self.distance_in_meters.is_none() || self.walk_time_minutes.is_none() {
            let estimate = WalkEstimate::from_origin(self.coordinates());
            self.distance_in_meters.get_or_insert(estimate.distance_meters);
            self.walk_time_minutes.get_or_insert(estimate.time_minutes);
        }
        self
    }
}

/// A stored restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
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

impl Restaurant {
    /// Attach a store-assigned identifier to a new record.
    #[must_use]
    pub fn from_new(id: RestaurantId, new: NewRestaurant) -> Self {
        let NewRestaurant {
            name,
            cuisine_type,
            location,
            latitude,
            longitude,
            rating,
            is_hpb_healthy,
            image_url,
            opening_hours,
            address,
            distance_in_meters,
            walk_time_minutes,
        } = new;
        Self {
            id,
            name,
            cuisine_type,
            location,
            latitude,
            longitude,
            rating,
            is_hpb_healthy,
            image_url,
            opening_hours,
            address,
            distance_in_meters,
            walk_time_minutes,
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Optional exact-match filters applied when listing restaurants.
///
/// `None` passes every restaurant. A blank cuisine is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantCriteria {
    cuisine_type: Option<String>,
    is_hpb_healthy: Option<bool>,
}

impl RestaurantCriteria {
    /// # Examples
    /// ```
    /// use eatinery::domain::RestaurantCriteria;
    ///
    /// let criteria = RestaurantCriteria::new(Some(String::new()), Some(true));
    /// assert_eq!(criteria.cuisine_type(), None);
    /// assert_eq!(criteria.is_hpb_healthy(), Some(true));
    /// ```
    #[must_use]
    pub fn new(cuisine_type: Option<String>, is_hpb_healthy: Option<bool>) -> Self {
        Self {
            cuisine_type: cuisine_type.filter(|value| !value.is_empty()),
            is_hpb_healthy,
        }
    }

    #[must_use]
    pub fn cuisine_type(&self) -> Option<&str> {
        self.cuisine_type.as_deref()
    }

    #[must_use]
    pub fn is_hpb_healthy(&self) -> Option<bool> {
        self.is_hpb_healthy
    }

    /// Whether `restaurant` satisfies every supplied filter.
    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.cuisine_type
            .as_deref()
            .is_none_or(|cuisine| restaurant.cuisine_type == cuisine)
            && self
                .is_hpb_healthy
                .is_none_or(|flag| restaurant.is_hpb_healthy == flag)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn new_restaurant() -> NewRestaurant {
        NewRestaurant {
            name: "Seoul Garden".into(),
            cuisine_type: "Korean".into(),
            location: "JEM Shopping Mall, #03-14".into(),
            latitude: 1.3329,
            longitude: 103.7436,
            rating: Some(4.8),
            is_hpb_healthy: true,
            image_url: None,
            opening_hours: None,
            address: None,
            distance_in_meters: None,
            walk_time_minutes: None,
        }
    }

    #[rstest]
    fn valid_restaurant_passes(new_restaurant: NewRestaurant) {
        assert!(new_restaurant.validate().is_ok());
    }

    #[rstest]
    fn blank_name_is_rejected(mut new_restaurant: NewRestaurant) {
        new_restaurant.name = "  ".into();
        let err = new_restaurant.validate().expect_err("blank name");
        assert_eq!(err.field(), "name");
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.1)]
    fn rating_outside_scale_is_rejected(mut new_restaurant: NewRestaurant, #[case] rating: f64) {
        new_restaurant.rating = Some(rating);
        let err = new_restaurant.validate().expect_err("rating out of range");
        assert_eq!(err.field(), "rating");
    }

    #[rstest]
    fn non_finite_latitude_is_rejected(mut new_restaurant: NewRestaurant) {
        new_restaurant.latitude = f64::NAN;
        let err = new_restaurant.validate().expect_err("nan latitude");
        assert_eq!(err.field(), "latitude");
    }

    #[rstest]
    fn walk_estimate_fills_missing_values(new_restaurant: NewRestaurant) {
        let filled = new_restaurant.with_walk_estimate();
        let estimate = WalkEstimate::from_origin(filled.coordinates());
        assert_eq!(filled.distance_in_meters, Some(estimate.distance_meters));
        assert_eq!(filled.walk_time_minutes, Some(estimate.time_minutes));
    }

    #[rstest]
    fn walk_estimate_keeps_supplied_values(mut new_restaurant: NewRestaurant) {
        new_restaurant.distance_in_meters = Some(650);
        new_restaurant.walk_time_minutes = Some(8);
        let filled = new_restaurant.with_walk_estimate();
        assert_eq!(filled.distance_in_meters, Some(650));
        assert_eq!(filled.walk_time_minutes, Some(8));
    }

    #[rstest]
    #[case(RestaurantCriteria::default(), true)]
    #[case(RestaurantCriteria::new(Some("Korean".into()), None), true)]
    #[case(RestaurantCriteria::new(Some("korean".into()), None), false)]
    #[case(RestaurantCriteria::new(Some(String::new()), None), true)]
    #[case(RestaurantCriteria::new(None, Some(true)), true)]
    #[case(RestaurantCriteria::new(None, Some(false)), false)]
    #[case(RestaurantCriteria::new(Some("Japanese".into()), Some(true)), false)]
    fn criteria_match_exactly(
        new_restaurant: NewRestaurant,
        #[case] criteria: RestaurantCriteria,
        #[case] expected: bool,
    ) {
        let restaurant = Restaurant::from_new(RestaurantId::new(1), new_restaurant);
        assert_eq!(criteria.matches(&restaurant), expected);
    }
}
