//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{AccountService, ExampleDataSeeder, PasswordHash, RestaurantCatalogueService};
use crate::inbound::http::restaurants::{
    add_directions, add_menu_item, create_restaurant, filter_restaurants, get_directions,
    get_menu, get_restaurant, list_restaurants,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::users::{current_user, login, logout, register};
use crate::inbound::http::validation::{json_config, query_config};
use crate::outbound::memory::InMemoryStore;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Reversible stand-in for Argon2 so handler tests stay fast.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        Ok(PasswordHash::new(format!("plain:{password}")))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        Ok(hash.as_str() == format!("plain:{password}"))
    }
}

/// HTTP state over an in-memory store, optionally holding the example
/// catalogue.
pub async fn memory_state(seeded: bool) -> web::Data<HttpState> {
    let store = Arc::new(InMemoryStore::new());
    if seeded {
        ExampleDataSeeder::new(store.clone(), store.clone(), store.clone())
            .seed_catalogue()
            .await
            .expect("seed example catalogue");
    }
    let catalogue = Arc::new(RestaurantCatalogueService::new(
        store.clone(),
        store.clone(),
        store.clone(),
    ));
    let accounts = Arc::new(AccountService::new(store, Arc::new(PlainHasher)));
    web::Data::new(HttpState::new(HttpStatePorts {
        restaurants: catalogue.clone(),
        catalogue,
        login: accounts.clone(),
        registration: accounts.clone(),
        profile: accounts,
    }))
}

/// Full `/api` scope over `state`, wired like the production server.
pub fn api_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).service(
        web::scope("/api")
            .wrap(test_session_middleware())
            .app_data(json_config())
            .app_data(query_config())
            .service(filter_restaurants)
            .service(list_restaurants)
            .service(create_restaurant)
            .service(get_restaurant)
            .service(get_menu)
            .service(add_menu_item)
            .service(get_directions)
            .service(add_directions)
            .service(register)
            .service(login)
            .service(logout)
            .service(current_user),
    )
}

/// Register `username` through the API and return the session cookie.
pub async fn register_and_sign_in<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({ "username": username, "password": "hunter2" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED, "registration succeeds");
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

/// Read a JSON response body.
pub async fn json_body(res: ServiceResponse) -> Value {
    let body = test::read_body(res).await;
    serde_json::from_slice(&body).expect("JSON body")
}
