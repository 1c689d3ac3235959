//! Builders for HTTP state over either store backend.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use eatinery::domain::ports::{
    MenuItemRepository, RestaurantRepository, UserRepository, WalkingDirectionRepository,
};
use eatinery::domain::{AccountService, ExampleDataSeeder, RestaurantCatalogueService};
use eatinery::inbound::http::state::{HttpState, HttpStatePorts};
use eatinery::outbound::memory::InMemoryStore;
use eatinery::outbound::persistence::{
    DieselMenuItemRepository, DieselRestaurantRepository, DieselUserRepository,
    DieselWalkingDirectionRepository,
};
use eatinery::outbound::security::Argon2PasswordHasher;

use super::ServerConfig;

/// Repository handles shared by the catalogue and account services.
struct Stores<R, M, W, U> {
    restaurants: Arc<R>,
    menu_items: Arc<M>,
    directions: Arc<W>,
    users: Arc<U>,
}

/// Assemble handler state for `config`, seeding the catalogue when asked.
///
/// # Errors
///
/// Returns [`std::io::Error`] when example data cannot be written.
pub(crate) async fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let ports = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL store");
            wire(
                Stores {
                    restaurants: Arc::new(DieselRestaurantRepository::new(pool.clone())),
                    menu_items: Arc::new(DieselMenuItemRepository::new(pool.clone())),
                    directions: Arc::new(DieselWalkingDirectionRepository::new(pool.clone())),
                    users: Arc::new(DieselUserRepository::new(pool.clone())),
                },
                config.seed_example_data,
            )
            .await?
        }
        None => {
            info!("using in-memory store; data is lost on restart");
            let store = Arc::new(InMemoryStore::new());
            wire(
                Stores {
                    restaurants: store.clone(),
                    menu_items: store.clone(),
                    directions: store.clone(),
                    users: store,
                },
                config.seed_example_data,
            )
            .await?
        }
    };
    Ok(web::Data::new(HttpState::new(ports)))
}

async fn wire<R, M, W, U>(stores: Stores<R, M, W, U>, seed: bool) -> std::io::Result<HttpStatePorts>
where
    R: RestaurantRepository + 'static,
    M: MenuItemRepository + 'static,
    W: WalkingDirectionRepository + 'static,
    U: UserRepository + 'static,
{
    let Stores {
        restaurants,
        menu_items,
        directions,
        users,
    } = stores;

    if seed {
        let seeder =
            ExampleDataSeeder::new(restaurants.clone(), menu_items.clone(), directions.clone());
        seeder.seed_catalogue().await.map_err(|err| {
            std::io::Error::other(format!("example data seeding failed: {err}"))
        })?;
    }

    let catalogue = Arc::new(RestaurantCatalogueService::new(
        restaurants,
        menu_items,
        directions,
    ));
    let accounts = Arc::new(AccountService::new(
        users,
        Arc::new(Argon2PasswordHasher::new()),
    ));
    Ok(HttpStatePorts {
        restaurants: catalogue.clone(),
        catalogue,
        login: accounts.clone(),
        registration: accounts.clone(),
        profile: accounts,
    })
}
