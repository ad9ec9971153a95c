//! # Startup Configuration
//!
//! Bind address for the HTTP server, read from the environment (after
//! `.env` has been loaded by the binary).
//!
//! ## Environment Variables
//!
//! - `HOST` - Interface to bind, defaults to `0.0.0.0`
//! - `PORT` - Port to bind, defaults to `5000`

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tracing::debug;

use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value}")]
    InvalidPort { value: String },

    #[error("invalid HOST value: {value}")]
    InvalidHost { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads `HOST` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Builds a config from raw variable values; `None` falls back to the default.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost { value: host.clone() })?;

        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        debug!(%host, port, "Loaded server configuration");
        Ok(Self { host, port })
    }

    #[inline]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
