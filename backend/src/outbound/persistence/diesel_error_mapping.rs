//! Shared Diesel error mapping onto [`StoreError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Pool failures mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::connection(message)
        }
    }
}

/// Map Diesel errors that carry no constraint semantics for the caller.
pub(crate) fn map_diesel_error(error: DieselError) -> StoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => StoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreError::connection("database connection error")
        }
        DieselError::DeserializationError(_) => StoreError::query("row decoding failed"),
        _ => StoreError::query("database error"),
    }
}

/// Constraint violation classes the repositories translate into domain
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Unique,
    ForeignKey,
}

/// Inspect a Diesel error for a unique or foreign-key violation.
pub(crate) fn constraint_violation(error: &DieselError) -> Option<Violation> {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            Some(Violation::Unique)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            Some(Violation::ForeignKey)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        assert_eq!(
            map_pool_error(PoolError::checkout("timed out")),
            StoreError::connection("timed out")
        );
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert!(matches!(
            map_diesel_error(DieselError::NotFound),
            StoreError::Query { .. }
        ));
    }

    #[rstest]
    fn constraint_detection_ignores_other_errors() {
        assert_eq!(constraint_violation(&DieselError::NotFound), None);
        assert_eq!(
            constraint_violation(&DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new("duplicate key".to_owned()),
            )),
            Some(Violation::Unique)
        );
    }
}
