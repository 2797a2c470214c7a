//! Server configuration
//!
//! Settings come from defaults, then an optional JSON file named by
//! `FERRUMKV_CONFIG`, then the `FERRUMKV_BIND` and `FERRUMKV_LOG`
//! environment variables.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Env var naming a JSON config file
pub const CONFIG_PATH_VAR: &str = "FERRUMKV_CONFIG";

/// Env var overriding the listen address
pub const BIND_VAR: &str = "FERRUMKV_BIND";

/// Env var overriding the log filter
pub const LOG_VAR: &str = "FERRUMKV_LOG";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid {var} value {value:?}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,

    /// `tracing` filter directive, e.g. `info` or `ferrumkv=debug`
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load the configuration, reading variables through `var`
    pub fn load_with<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match var(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = var(BIND_VAR) {
            config.bind_addr = bind.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidVar {
                    var: BIND_VAR,
                    value: bind.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(filter) = var(LOG_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Read a JSON config file; missing fields keep their defaults
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }
}
