//! Eatinery API entry-point: settings, tracing, store selection, and the
//! HTTP listener.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use eatinery::inbound::http::health::HealthState;
use eatinery::inbound::http::session_config::{BuildMode, session_settings_from_env};
use eatinery::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let mut config =
        ServerConfig::new(session, bind_addr).with_example_data(settings.seed_example_data());
    if let Some(database_url) = settings.database_url() {
        run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
        let pool_config = PoolConfig::new(database_url)
            .with_max_size(settings.pool_max_size())
            .with_connection_timeout(settings.pool_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let shutdown_health = health_state.clone();
    actix_web::rt::spawn(async move {
        if actix_web::rt::signal::ctrl_c().await.is_ok() {
            shutdown_health.mark_unhealthy();
            info!("shutdown requested; liveness probe now failing");
        }
    });

    let listen = config.bind_addr();
    let server = create_server(health_state, config).await?;
    info!(%listen, "eatinery listening");
    server.await
}
