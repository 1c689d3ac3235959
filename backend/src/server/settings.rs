//! Process settings loaded via OrthoConfig from `EATINERY_*` variables.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the API process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EATINERY")]
pub struct ServerSettings {
    /// PostgreSQL connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Listen address, `host:port`.
    pub bind_addr: Option<String>,
    /// Load the example catalogue when the store holds no restaurants.
    pub seed_example_data: Option<bool>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection before failing the request.
    pub pool_timeout_secs: Option<u64>,
}

/// Settings that parse but cannot be used.
#[derive(Debug, thiserror::Error)]
#[error("invalid EATINERY_BIND_ADDR '{value}': {source}")]
pub struct BindAddrError {
    value: String,
    #[source]
    source: std::net::AddrParseError,
}

impl ServerSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`BindAddrError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| BindAddrError {
            value: value.to_owned(),
            source,
        })
    }

    /// Whether to seed the example catalogue; on unless switched off.
    pub fn seed_example_data(&self) -> bool {
        self.seed_example_data.unwrap_or(true)
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    pub fn pool_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_timeout_secs.unwrap_or(DEFAULT_POOL_TIMEOUT_SECS))
    }

    /// Connection string with surrounding whitespace removed; blank counts
    /// as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
