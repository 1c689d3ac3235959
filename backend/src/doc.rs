//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every handler annotated with `#[utoipa::path]` plus
//! the request and response schemas they reference. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` prints it for tooling.

use crate::domain::{
    CalorieClass, DirectionStep, MenuItem, NewMenuItem, NewRestaurant, Restaurant,
    RestaurantWithMenu, WalkingDirection,
};
use crate::inbound::http::restaurants::{FilterRequest, MenuItemResponse, NewDirectionsRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{LoginRequest, UserResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/login or POST /api/register.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Eatinery API",
        description = "Restaurant discovery with calorie-aware filtering, menus, and walking directions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::restaurants::list_restaurants,
        crate::inbound::http::restaurants::get_restaurant,
        crate::inbound::http::restaurants::get_menu,
        crate::inbound::http::restaurants::get_directions,
        crate::inbound::http::restaurants::filter_restaurants,
        crate::inbound::http::restaurants::create_restaurant,
        crate::inbound::http::restaurants::add_menu_item,
        crate::inbound::http::restaurants::add_directions,
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        Restaurant,
        NewRestaurant,
        MenuItem,
        NewMenuItem,
        MenuItemResponse,
        CalorieClass,
        WalkingDirection,
        DirectionStep,
        NewDirectionsRequest,
        FilterRequest,
        RestaurantWithMenu,
        LoginRequest,
        UserResponse,
    )),
    tags(
        (name = "restaurants", description = "Catalogue browsing, filtering, and curation"),
        (name = "users", description = "Accounts and sessions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
