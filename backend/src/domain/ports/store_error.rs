//! Errors shared by every data-store port.
//!
//! Both store adapters map their failures onto these variants so services
//! see identical behaviour regardless of the backing store.

use tracing::error;

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Failures raised by restaurant, menu, directions and user stores.
    pub enum StoreError {
        /// Store connection could not be established.
        Connection { message: String } => "store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "store query failed: {message}",
        /// Another account already uses this username.
        DuplicateUsername { username: String } =>
            "username {username} is already taken",
        /// The restaurant already has walking directions.
        DuplicateDirections { restaurant_id: i32 } =>
            "restaurant {restaurant_id} already has walking directions",
        /// A child record referenced a restaurant that does not exist.
        MissingRestaurant { restaurant_id: i32 } =>
            "restaurant {restaurant_id} not found",
    }
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Connection { message } => {
                error!(%message, "store unavailable");
                Error::service_unavailable("data store is unavailable")
            }
            StoreError::Query { message } => {
                error!(%message, "store query failed");
                Error::internal("data store query failed")
            }
            err @ StoreError::DuplicateUsername { .. }
            | err @ StoreError::DuplicateDirections { .. } => Error::conflict(err.to_string()),
            err @ StoreError::MissingRestaurant { .. } => Error::not_found(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(StoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(StoreError::query("syntax"), ErrorCode::InternalError)]
    #[case(StoreError::duplicate_username("alice"), ErrorCode::Conflict)]
    #[case(StoreError::duplicate_directions(1), ErrorCode::Conflict)]
    #[case(StoreError::missing_restaurant(9), ErrorCode::NotFound)]
    fn maps_to_domain_codes(#[case] err: StoreError, #[case] expected: ErrorCode) {
        assert_eq!(Error::from(err).code(), expected);
    }

    #[rstest]
    fn internal_messages_do_not_echo_store_text() {
        let err = Error::from(StoreError::query("relation \"users\" does not exist"));
        assert!(!err.message().contains("relation"));
    }
}
