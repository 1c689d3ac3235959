//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod restaurants;
mod restaurants_dto;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
