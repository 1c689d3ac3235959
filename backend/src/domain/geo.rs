//! Walking geometry: great-circle distance plus walk-time and calorie
//! estimates derived from it.
//!
//! All functions are pure. Distances are whole metres, times whole minutes
//! and energy whole kilocalories, each rounded to the nearest integer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mean Earth radius in metres used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Average walking pace in metres per minute.
pub const WALKING_PACE_METERS_PER_MINUTE: f64 = 83.0;

/// Energy burned per kilometre walked.
pub const KCAL_PER_KILOMETER: f64 = 65.0;

/// Upper bound (inclusive) of the low calorie class.
pub const LOW_CALORIE_CEILING: i32 = 400;

/// Upper bound (inclusive) of the medium calorie class.
pub const MEDIUM_CALORIE_CEILING: i32 = 600;

/// Jurong East MRT station, the fixed point restaurant distances are
/// measured from.
pub const REFERENCE_ORIGIN: Coordinates = Coordinates {
    latitude: 1.3331,
    longitude: 103.7422,
};

/// A latitude/longitude pair in decimal degrees.
///
/// No range validation is applied; callers pass through whatever the data
/// store holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a coordinate pair from degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance between two points, rounded to whole metres.
///
/// # Examples
/// ```
/// use eatinery::domain::geo::{Coordinates, distance_meters};
///
/// let origin = Coordinates::new(1.3331, 103.7422);
/// assert_eq!(distance_meters(origin, origin), 0);
/// ```
#[must_use]
pub fn distance_meters(from: Coordinates, to: Coordinates) -> i32 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_METERS * c).round() as i32
}

/// Minutes needed to walk `distance` metres at the average pace.
#[must_use]
pub fn walking_time_minutes(distance: i32) -> i32 {
    (f64::from(distance) / WALKING_PACE_METERS_PER_MINUTE).round() as i32
}

/// Kilocalories burned walking `distance` metres.
#[must_use]
pub fn calories_burned(distance: i32) -> i32 {
    (f64::from(distance) / 1000.0 * KCAL_PER_KILOMETER).round() as i32
}

/// Coarse calorie band shown next to menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalorieClass {
    Low,
    Medium,
    High,
}

impl CalorieClass {
    /// Classify a calorie count: low up to 400, medium up to 600, high above.
    ///
    /// # Examples
    /// ```
    /// use eatinery::domain::geo::CalorieClass;
    ///
    /// assert_eq!(CalorieClass::classify(400), CalorieClass::Low);
    /// assert_eq!(CalorieClass::classify(601), CalorieClass::High);
    /// ```
    #[must_use]
    pub fn classify(calories: i32) -> Self {
        if calories <= LOW_CALORIE_CEILING {
            Self::Low
        } else if calories <= MEDIUM_CALORIE_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Distance, walk time and calorie burn for one walking distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkEstimate {
    pub distance_meters: i32,
    pub time_minutes: i32,
    pub calories_burned: i32,
}

impl WalkEstimate {
    #[must_use]
    pub fn from_distance(distance_meters: i32) -> Self {
        Self {
            distance_meters,
            time_minutes: walking_time_minutes(distance_meters),
            calories_burned: calories_burned(distance_meters),
        }
    }

    /// Estimate for walking from [`REFERENCE_ORIGIN`] to `destination`.
    #[must_use]
    pub fn from_origin(destination: Coordinates) -> Self {
        Self::from_distance(distance_meters(REFERENCE_ORIGIN, destination))
    }
}
