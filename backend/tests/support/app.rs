//! In-process application harness for HTTP integration suites.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use eatinery::Trace;
use eatinery::domain::ports::{PasswordHashError, PasswordHasher};
use eatinery::domain::{
    AccountService, ExampleDataSeeder, PasswordHash, RestaurantCatalogueService, TRACE_ID_HEADER,
};
use eatinery::inbound::http::health::{HealthState, live, ready};
use eatinery::inbound::http::restaurants::{
    add_directions, add_menu_item, create_restaurant, filter_restaurants, get_directions,
    get_menu, get_restaurant, list_restaurants,
};
use eatinery::inbound::http::state::{HttpState, HttpStatePorts};
use eatinery::inbound::http::users::{current_user, login, logout, register};
use eatinery::inbound::http::validation::{json_config, query_config};
use eatinery::outbound::memory::InMemoryStore;
use serde_json::Value;

/// Fast stand-in for Argon2.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        Ok(PasswordHash::new(format!("plain:{password}")))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        Ok(hash.as_str() == format!("plain:{password}"))
    }
}

/// Handler state over a fresh in-memory store.
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

/// Application wired like the production server, minus Swagger UI.
pub fn full_app(
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
    key: Key,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    let api = web::scope("/api")
        .wrap(session)
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
        .service(current_user);
    App::new()
        .app_data(state)
        .app_data(health)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
}

/// What a test cares about from one response.
#[derive(Clone, Debug)]
pub struct Exchange {
    pub status: u16,
    pub trace_id: Option<String>,
    pub session_cookie: Option<String>,
    pub body: Value,
}

/// Send `request` through a freshly initialised app sharing `state` and `key`.
pub async fn exchange(
    state: web::Data<HttpState>,
    key: Key,
    request: test::TestRequest,
) -> Exchange {
    let health = web::Data::new(HealthState::new());
    let app = test::init_service(full_app(state, health, key)).await;
    let res = test::call_service(&app, request.to_request()).await;
    let status = res.status().as_u16();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let session_cookie = res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| format!("session={}", cookie.value()));
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    Exchange {
        status,
        trace_id,
        session_cookie,
        body,
    }
}
