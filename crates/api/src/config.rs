//! Runtime configuration, read from the environment.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "CATALOG_API_ADDR";

/// Listen address used when [`ADDR_ENV`] is unset.
pub const DEFAULT_ADDR: &str = "0.0.0.0:4000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let Some(raw) = lookup(ADDR_ENV) else {
            tracing::debug!("{ADDR_ENV} not set; listening on {DEFAULT_ADDR}");
            return Ok(Self::default());
        };

        let bind_addr = raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_ENV,
                value: raw.clone(),
                source,
            })?;

        Ok(Self { bind_addr })
    }
}
