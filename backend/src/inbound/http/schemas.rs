//! OpenAPI schema definitions for the domain error envelope.
//!
//! [`crate::domain::Error`] keeps its fields private and serialises through
//! a DTO, so its schema is declared here in the adapter layer instead of
//! being derived on the domain type.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request clashes with existing data.
    #[schema(rename = "conflict")]
    Conflict,
    /// The data store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "limit must be between 500 and 3000, got 100")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context such as `{"field": "limit", "code": "out_of_range"}`.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "conflict", "service_unavailable"] {
            assert!(schema_json.contains(code), "schema should list {code}");
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        assert_eq!(ErrorSchema::name(), "Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }
}
