//! Account and session handlers.
//!
//! ```text
//! POST /api/register {"username":"alice","password":"hunter2"}
//! POST /api/login    {"username":"alice","password":"hunter2"}
//! POST /api/logout
//! GET  /api/user
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, LoginValidationError, User, UsernameValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Credentials body shared by register and login.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "hunter2")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Public view of an account; the password hash never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "alice")]
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            username: user.username().to_string(),
        }
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let code = match &err {
        LoginValidationError::InvalidUsername(UsernameValidationError::Empty) => "empty_username",
        LoginValidationError::InvalidUsername(UsernameValidationError::TooLong { .. }) => {
            "username_too_long"
        }
        LoginValidationError::EmptyPassword => "empty_password",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": code }))
}

fn parse_credentials(payload: web::Json<LoginRequest>) -> Result<LoginCredentials, Error> {
    LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)
}

/// Create an account and sign it in.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid credentials payload", body = ErrorSchema),
        (status = 409, description = "Username taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = parse_credentials(payload)?;
    let user = state.registration.register(&credentials).await?;
    session.persist_user(user.id())?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid credentials payload", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let credentials = parse_credentials(payload)?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(user.id())?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// End the session. Succeeds whether or not one existed.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// The signed-in account.
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/user")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<UserResponse>> {
    let user_id = session.require_user_id()?;
    let user = state.profile.fetch_profile(user_id).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
