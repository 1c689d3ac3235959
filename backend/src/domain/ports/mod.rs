//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`]) are implemented by
//! outbound adapters. Driving ports (`*Query`, `*Command`, `*Service`) are
//! implemented by domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod menu_item_repository;
mod password_hasher;
mod registration_service;
mod restaurant_command;
mod restaurant_query;
mod restaurant_repository;
mod store_error;
mod user_profile_query;
mod user_repository;
mod walking_direction_repository;

pub use login_service::LoginService;
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
pub use menu_item_repository::MenuItemRepository;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use registration_service::RegistrationService;
pub use restaurant_command::RestaurantCommand;
pub use restaurant_query::RestaurantQuery;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::RestaurantRepository;
pub use store_error::StoreError;
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
#[cfg(test)]
pub use walking_direction_repository::MockWalkingDirectionRepository;
pub use walking_direction_repository::WalkingDirectionRepository;
