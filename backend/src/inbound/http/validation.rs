//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejected input becomes an `invalid_request` error whose `details`
//! name the offending field and a machine-readable code, e.g.
//! `{"field": "isHpbHealthy", "value": "yes", "code": "invalid_boolean"}`.

use actix_web::{HttpRequest, error::JsonPayloadError, error::QueryPayloadError, web};
use serde_json::{Value, json};

use crate::domain::{Error, RestaurantId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidValue,
    InvalidType,
    InvalidInteger,
    InvalidBoolean,
    OutOfRange,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidValue => "invalid_value",
            Self::InvalidType => "invalid_type",
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidBoolean => "invalid_boolean",
            Self::OutOfRange => "out_of_range",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Wire name of a request field, as the client spelled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const RESTAURANT_ID: FieldName = FieldName::new("id");
pub(crate) const CUISINE_TYPE: FieldName = FieldName::new("cuisineType");
pub(crate) const IS_HPB_HEALTHY: FieldName = FieldName::new("isHpbHealthy");
pub(crate) const CALORIE_LIMIT: FieldName = FieldName::new("calorieLimit");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ValidationCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ValidationCode, value: impl Into<Value>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ValidationCode::MissingField)
}

pub(crate) fn invalid_type_error(field: FieldName, expected: &str, value: &Value) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be {expected}"))
        .with_value(ValidationCode::InvalidType, value.clone())
}

pub(crate) fn out_of_range_error(field: FieldName, message: String, value: f64) -> Error {
    ValidationError::new(field, message).with_value(ValidationCode::OutOfRange, value)
}

/// Field error for domain validation failures that already carry a message.
pub(crate) fn invalid_value_error(field: &'static str, message: impl Into<String>) -> Error {
    ValidationError::new(FieldName::new(field), message).with_code(ValidationCode::InvalidValue)
}

pub(crate) fn parse_restaurant_id(raw: &str) -> Result<RestaurantId, Error> {
    raw.parse::<i32>().map(RestaurantId::new).map_err(|_| {
        ValidationError::new(RESTAURANT_ID, "restaurant id must be an integer")
            .with_value(ValidationCode::InvalidInteger, raw)
    })
}

/// Parse an optional query flag; only the literals `true` and `false` pass.
pub(crate) fn parse_optional_bool(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<bool>, Error> {
    value
        .map(|raw| match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            other => {
                let name = field.as_str();
                Err(
                    ValidationError::new(field, format!("{name} must be true or false"))
                        .with_value(ValidationCode::InvalidBoolean, other),
                )
            }
        })
        .transpose()
}

pub(crate) fn parse_optional_i32(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<i32>, Error> {
    value
        .map(|raw| {
            raw.trim().parse::<i32>().map_err(|_| {
                let name = field.as_str();
                ValidationError::new(field, format!("{name} must be an integer"))
                    .with_value(ValidationCode::InvalidInteger, raw)
            })
        })
        .transpose()
}

fn malformed_body_error(reason: String) -> Error {
    Error::invalid_request("request body is not valid JSON for this endpoint").with_details(json!({
        "code": ValidationCode::MalformedBody.as_str(),
        "reason": reason,
    }))
}

/// JSON extractor configuration that reports payload failures in the
/// standard error envelope instead of actix's plain-text body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let error = match &err {
            JsonPayloadError::ContentType => Error::invalid_request(
                "request body must be sent as application/json",
            )
            .with_details(json!({ "code": ValidationCode::MalformedBody.as_str() })),
            other => malformed_body_error(other.to_string()),
        };
        error.into()
    })
}

/// Query extractor configuration matching [`json_config`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        Error::invalid_request("query string could not be parsed")
            .with_details(json!({
                "code": ValidationCode::MalformedBody.as_str(),
                "reason": err.to_string(),
            }))
            .into()
    })
}
