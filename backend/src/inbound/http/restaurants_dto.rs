//! Restaurant endpoint DTOs and parsing helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    CalorieClass, CalorieFilter, CalorieFilterError, DirectionStep, Error, MenuItem,
    NewWalkingDirection, RestaurantCriteria, RestaurantId,
};
use crate::inbound::http::validation::{
    CALORIE_LIMIT, CUISINE_TYPE, IS_HPB_HEALTHY, LIMIT, invalid_type_error, invalid_value_error,
    missing_field_error, out_of_range_error, parse_optional_bool, parse_optional_i32,
    parse_restaurant_id,
};

#[derive(Debug, Deserialize)]
pub(super) struct RestaurantPath {
    pub(super) id: String,
}

pub(super) fn parse_restaurant_path(path: RestaurantPath) -> Result<RestaurantId, Error> {
    parse_restaurant_id(&path.id)
}

/// Query string for `GET /api/restaurants`.
///
/// Values arrive as raw strings so malformed flags are reported with the
/// standard error envelope.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RestaurantListQuery {
    /// Exact cuisine match; empty means any cuisine.
    pub cuisine_type: Option<String>,
    /// Exactly `true` or `false`; any other value is rejected with 400
    /// rather than read as `false`.
    pub is_hpb_healthy: Option<String>,
}

impl TryFrom<RestaurantListQuery> for RestaurantCriteria {
    type Error = Error;

    fn try_from(query: RestaurantListQuery) -> Result<Self, Self::Error> {
        let is_hpb_healthy = parse_optional_bool(query.is_hpb_healthy.as_deref(), IS_HPB_HEALTHY)?;
        Ok(Self::new(query.cuisine_type, is_hpb_healthy))
    }
}

/// Query string for `GET /api/restaurants/{id}/menu`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MenuQuery {
    /// Inclusive calorie ceiling applied to the menu. A value that is not an
    /// integer is rejected with 400 instead of returning the full menu.
    pub calorie_limit: Option<String>,
}

impl MenuQuery {
    pub(super) fn ceiling(&self) -> Result<Option<i32>, Error> {
        parse_optional_i32(self.calorie_limit.as_deref(), CALORIE_LIMIT)
    }
}

/// Body of `POST /api/restaurants/filter`.
///
/// Fields are kept as raw JSON so a wrongly typed value is reported against
/// its own field rather than as an unparseable body. `mealType` is accepted
/// for older clients and ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(default)]
    #[schema(value_type = f64, minimum = 500, maximum = 3000, example = 420)]
    pub limit: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Korean")]
    pub cuisine_type: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub meal_type: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_hpb_healthy: Option<Value>,
}

impl TryFrom<FilterRequest> for CalorieFilter {
    type Error = Error;

    fn try_from(request: FilterRequest) -> Result<Self, Self::Error> {
        let limit = match request.limit {
            None | Some(Value::Null) => return Err(missing_field_error(LIMIT)),
            Some(Value::Number(number)) => number
                .as_f64()
                .ok_or_else(|| invalid_type_error(LIMIT, "a number", &Value::Number(number)))?,
            Some(other) => return Err(invalid_type_error(LIMIT, "a number", &other)),
        };
        let cuisine_type = match request.cuisine_type {
            None | Some(Value::Null) => None,
            Some(Value::String(cuisine)) => Some(cuisine),
            Some(other) => return Err(invalid_type_error(CUISINE_TYPE, "a string", &other)),
        };
        let is_hpb_healthy = match request.is_hpb_healthy {
            None | Some(Value::Null) => None,
            Some(Value::Bool(flag)) => Some(flag),
            Some(other) => return Err(invalid_type_error(IS_HPB_HEALTHY, "a boolean", &other)),
        };
        CalorieFilter::try_new(limit, cuisine_type, is_hpb_healthy).map_err(|err| match err {
            CalorieFilterError::OutOfRange { actual, .. } => {
                out_of_range_error(LIMIT, err.to_string(), actual)
            }
            CalorieFilterError::NonFinite => invalid_value_error("limit", err.to_string()),
        })
    }
}

/// Menu item as listed by the menu endpoint, with its calorie class.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    #[serde(flatten)]
    pub item: MenuItem,
    pub calorie_class: CalorieClass,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            calorie_class: item.calorie_class(),
            item,
        }
    }
}

/// Body of `POST /api/restaurants/{id}/directions`.
///
/// Totals may be omitted; they are then computed from the steps.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDirectionsRequest {
    pub steps: Vec<DirectionStep>,
    #[serde(default)]
    pub total_distance_meters: Option<i32>,
    #[serde(default)]
    pub total_time_minutes: Option<i32>,
    #[serde(default)]
    pub calories_burned: Option<i32>,
}

impl TryFrom<NewDirectionsRequest> for NewWalkingDirection {
    type Error = Error;

    fn try_from(request: NewDirectionsRequest) -> Result<Self, Self::Error> {
        NewWalkingDirection::try_new(
            request.steps,
            request.total_distance_meters,
            request.total_time_minutes,
            request.calories_burned,
        )
        .map_err(|err| invalid_value_error(err.field(), err.to_string()))
    }
}
