//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed restaurant, menu, directions and account
//! entities plus the services that implement the driving ports. Nothing in
//! here depends on actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Restaurant, MenuItem, WalkingDirection, User: catalogue and account
//!   entities with their `New*` insert forms.
//! - CalorieFilter and the filter pipeline.
//! - RestaurantCatalogueService, AccountService, ExampleDataSeeder.

pub mod account_service;
pub mod auth;
pub mod calorie_filter;
pub mod catalogue_service;
pub mod directions;
pub mod error;
pub mod example_data;
pub mod geo;
pub mod menu;
pub mod ports;
pub mod restaurant;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::calorie_filter::{
    CalorieFilter, CalorieFilterError, MAX_CALORIE_LIMIT, MIN_CALORIE_LIMIT, RestaurantWithMenu,
    filter_restaurants,
};
pub use self::catalogue_service::RestaurantCatalogueService;
pub use self::directions::{
    DirectionStep, DirectionsValidationError, NewWalkingDirection, WalkingDirection,
    WalkingDirectionId,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeeder, ExampleDataSeedingError, SeedingResult};
pub use self::geo::{CalorieClass, Coordinates, WalkEstimate};
pub use self::menu::{MenuItem, MenuItemId, MenuItemValidationError, NewMenuItem};
pub use self::restaurant::{
    NewRestaurant, Restaurant, RestaurantCriteria, RestaurantId, RestaurantValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    NewUser, PasswordHash, USERNAME_MAX_CHARS, User, UserId, Username, UsernameValidationError,
};
