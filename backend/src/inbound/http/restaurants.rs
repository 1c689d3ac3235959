//! Restaurant catalogue HTTP handlers.
//!
//! ```text
//! GET  /api/restaurants?cuisineType=Korean&isHpbHealthy=true
//! GET  /api/restaurants/{id}
//! GET  /api/restaurants/{id}/menu?calorieLimit=450
//! GET  /api/restaurants/{id}/directions
//! POST /api/restaurants/filter {"limit":420,"cuisineType":"Korean"}
//! POST /api/restaurants                    (session required)
//! POST /api/restaurants/{id}/menu          (session required)
//! POST /api/restaurants/{id}/directions    (session required)
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{
    CalorieFilter, MenuItem, NewMenuItem, NewRestaurant, NewWalkingDirection, Restaurant,
    RestaurantCriteria, RestaurantWithMenu, WalkingDirection,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

pub use super::restaurants_dto::{
    FilterRequest, MenuItemResponse, MenuQuery, NewDirectionsRequest, RestaurantListQuery,
};
use super::restaurants_dto::{RestaurantPath, parse_restaurant_path};

/// List restaurants, optionally narrowed by cuisine and health flag.
#[utoipa::path(
    get,
    path = "/api/restaurants",
    params(RestaurantListQuery),
    responses(
        (status = 200, description = "Matching restaurants in store order", body = [Restaurant]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 503, description = "Data store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurants",
    security([])
)]
#[get("/restaurants")]
pub async fn list_restaurants(
    state: web::Data<HttpState>,
    query: web::Query<RestaurantListQuery>,
) -> ApiResult<web::Json<Vec<Restaurant>>> {
    let criteria = RestaurantCriteria::try_from(query.into_inner())?;
    let restaurants = state.restaurants.list_restaurants(&criteria).await?;
    Ok(web::Json(restaurants))
}

/// Fetch one restaurant.
#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant identifier")),
    responses(
        (status = 200, description = "Restaurant", body = Restaurant),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Unknown restaurant", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "getRestaurant",
    security([])
)]
#[get("/restaurants/{id}")]
pub async fn get_restaurant(
    state: web::Data<HttpState>,
    path: web::Path<RestaurantPath>,
) -> ApiResult<web::Json<Restaurant>> {
    let id = parse_restaurant_path(path.into_inner())?;
    Ok(web::Json(state.restaurants.restaurant(id).await?))
}

/// Menu of a restaurant; `calorieLimit` keeps items at or under the limit.
#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/menu",
    params(("id" = i32, Path, description = "Restaurant identifier"), MenuQuery),
    responses(
        (status = 200, description = "Menu items with calorie class", body = [MenuItemResponse]),
        (status = 400, description = "Invalid identifier or limit", body = ErrorSchema),
        (status = 404, description = "Unknown restaurant", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "getRestaurantMenu",
    security([])
)]
#[get("/restaurants/{id}/menu")]
pub async fn get_menu(
    state: web::Data<HttpState>,
    path: web::Path<RestaurantPath>,
    query: web::Query<MenuQuery>,
) -> ApiResult<web::Json<Vec<MenuItemResponse>>> {
    let id = parse_restaurant_path(path.into_inner())?;
    let ceiling = query.ceiling()?;
    let items = state.restaurants.menu(id, ceiling).await?;
    Ok(web::Json(
        items.into_iter().map(MenuItemResponse::from).collect(),
    ))
}

/// Walking directions from the reference origin to a restaurant.
#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/directions",
    params(("id" = i32, Path, description = "Restaurant identifier")),
    responses(
        (status = 200, description = "Walking directions", body = WalkingDirection),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "No directions for this restaurant", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "getRestaurantDirections",
    security([])
)]
#[get("/restaurants/{id}/directions")]
pub async fn get_directions(
    state: web::Data<HttpState>,
    path: web::Path<RestaurantPath>,
) -> ApiResult<web::Json<WalkingDirection>> {
    let id = parse_restaurant_path(path.into_inner())?;
    Ok(web::Json(state.restaurants.directions(id).await?))
}

/// Restaurants with at least one menu item within the calorie budget.
#[utoipa::path(
    post,
    path = "/api/restaurants/filter",
    request_body = FilterRequest,
    responses(
        (status = 200, description = "Restaurants with recommended items", body = [RestaurantWithMenu]),
        (status = 400, description = "Invalid filter", body = ErrorSchema),
        (status = 503, description = "Data store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "filterRestaurants",
    security([])
)]
#[post("/restaurants/filter")]
pub async fn filter_restaurants(
    state: web::Data<HttpState>,
    payload: web::Json<FilterRequest>,
) -> ApiResult<web::Json<Vec<RestaurantWithMenu>>> {
    let filter = CalorieFilter::try_from(payload.into_inner())?;
    Ok(web::Json(state.restaurants.filter(&filter).await?))
}

/// Add a restaurant. Distance and walk time default to estimates from the
/// reference origin.
#[utoipa::path(
    post,
    path = "/api/restaurants",
    request_body = NewRestaurant,
    responses(
        (status = 201, description = "Created restaurant", body = Restaurant),
        (status = 400, description = "Invalid restaurant", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "createRestaurant"
)]
#[post("/restaurants")]
pub async fn create_restaurant(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<NewRestaurant>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let created = state.catalogue.create_restaurant(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Add a menu item to an existing restaurant.
#[utoipa::path(
    post,
    path = "/api/restaurants/{id}/menu",
    params(("id" = i32, Path, description = "Restaurant identifier")),
    request_body = NewMenuItem,
    responses(
        (status = 201, description = "Created menu item", body = MenuItem),
        (status = 400, description = "Invalid menu item", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown restaurant", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "addMenuItem"
)]
#[post("/restaurants/{id}/menu")]
pub async fn add_menu_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<RestaurantPath>,
    payload: web::Json<NewMenuItem>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_restaurant_path(path.into_inner())?;
    let created = state.catalogue.add_menu_item(id, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Attach walking directions to a restaurant that has none yet.
#[utoipa::path(
    post,
    path = "/api/restaurants/{id}/directions",
    params(("id" = i32, Path, description = "Restaurant identifier")),
    request_body = NewDirectionsRequest,
    responses(
        (status = 201, description = "Created directions", body = WalkingDirection),
        (status = 400, description = "Invalid steps or totals", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown restaurant", body = ErrorSchema),
        (status = 409, description = "Directions already exist", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "addDirections"
)]
#[post("/restaurants/{id}/directions")]
pub async fn add_directions(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<RestaurantPath>,
    payload: web::Json<NewDirectionsRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_restaurant_path(path.into_inner())?;
    let directions = NewWalkingDirection::try_from(payload.into_inner())?;
    let created = state.catalogue.add_directions(id, directions).await?;
    Ok(HttpResponse::Created().json(created))
}

#[cfg(test)]
#[path = "restaurants_tests.rs"]
mod tests;
