//! HTTP listener configuration

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors for the HTTP listener
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port in PORT: {0:?}")]
    InvalidPort(String),
}

/// Listener settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `PORT` from the environment, defaulting to 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty PORT falls back to the default, like an unset one
        match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map(|port| Self { port })
                .map_err(|_| ConfigError::InvalidPort(value)),
            None => Ok(Self::default()),
        }
    }

    /// Address to bind, on all interfaces
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
