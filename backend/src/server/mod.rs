//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use eatinery::Trace;
#[cfg(debug_assertions)]
use eatinery::doc::ApiDoc;
use eatinery::inbound::http::health::{HealthState, live, ready};
use eatinery::inbound::http::restaurants::{
    add_directions, add_menu_item, create_restaurant, filter_restaurants, get_directions,
    get_menu, get_restaurant, list_restaurants,
};
use eatinery::inbound::http::state::HttpState;
use eatinery::inbound::http::users::{current_user, login, logout, register};
use eatinery::inbound::http::validation::{json_config, query_config};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

const SESSION_TTL_HOURS: i64 = 2;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(actix_web::cookie::time::Duration::hours(SESSION_TTL_HOURS)),
        )
        .build();

    // `/restaurants/filter` must be registered ahead of `/restaurants/{id}`.
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

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server and mark the process ready once it is bound.
///
/// Store wiring (and example data seeding) happens before the listener is
/// opened, so readiness implies the catalogue is queryable.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when seeding, binding, or starting fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config).await?;
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
        seed_example_data: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
