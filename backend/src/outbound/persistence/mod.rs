//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the store ports backed by PostgreSQL via
//! `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: every database failure maps to a `StoreError`
//!   variant, with unique and foreign-key violations surfaced as their
//!   domain meaning.
//!
//! # Example
//!
//! ```ignore
//! use eatinery::outbound::persistence::{DbPool, PoolConfig, DieselRestaurantRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/eatinery")).await?;
//! let restaurants = DieselRestaurantRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_menu_item_repository;
mod diesel_restaurant_repository;
mod diesel_user_repository;
mod diesel_walking_direction_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_menu_item_repository::DieselMenuItemRepository;
pub use diesel_restaurant_repository::DieselRestaurantRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_walking_direction_repository::DieselWalkingDirectionRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
