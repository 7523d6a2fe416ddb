use std::env;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RPC_TIMEOUT_MS};

use super::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Timeout for a single RPC round-trip.
    pub rpc_timeout_ms: u64,
}

impl ServerConfig {
    /// RPC timeout rounded up to whole seconds, at least one.
    pub fn rpc_timeout_seconds(&self) -> u64 {
        self.rpc_timeout_ms.div_ceil(1000).max(1)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_or("PORT", DEFAULT_PORT)?,
            rpc_timeout_ms: parse_env_or("RPC_TIMEOUT_MS", DEFAULT_RPC_TIMEOUT_MS)?,
        })
    }
}

/// Reads `name` and parses it, falling back to `default` when unset or blank.
pub(crate) fn parse_env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid_value(name, e.to_string())),
        _ => Ok(default),
    }
}
