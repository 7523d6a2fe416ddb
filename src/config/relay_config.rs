//! Mint relay configuration.
//!
//! Environment variables used:
//! - BASE_RPC_URL: JSON-RPC endpoint (default "https://sepolia.base.org")
//! - PRIVATE_KEY: hex signing key of the minter account (required for minting)
//! - GLPET_CONTRACT_ADDRESS: glPET (ERC-20) contract, has a built-in default
//! - GLPETC_CONTRACT_ADDRESS: glPETc (ERC-721) contract, no default
//! - GLPET_DECIMALS: decimals used to scale glPET amounts (default 18)
//! - ABI_DIR: extra directory searched first for ABI files
//! - NETWORK_NAME: network label reported by `/health`
//! - VERCEL_ENV / APP_ENV: deployment label reported by `/health`
//! - CONFIRMATION_TIMEOUT_SECONDS / CONFIRMATION_POLL_INTERVAL_MS: receipt wait bounds

use std::{env, fmt, path::PathBuf, str::FromStr, time::Duration};

use alloy::primitives::Address;
use zeroize::Zeroizing;

use crate::constants::{
    ABI_SEARCH_DIRS, DEFAULT_CONFIRMATION_POLL_INTERVAL_MS, DEFAULT_CONFIRMATION_TIMEOUT_SECONDS,
    DEFAULT_ENVIRONMENT, DEFAULT_FUNGIBLE_CONTRACT_ADDRESS, DEFAULT_FUNGIBLE_DECIMALS,
    DEFAULT_NETWORK_NAME, DEFAULT_RPC_URL,
};

use super::{server_config::parse_env_or, ConfigError};
use crate::utils::mask_rpc_url;

#[derive(Clone)]
pub struct RelayConfig {
    pub rpc_url: String,
    /// Absent key is not a startup failure: minting reports it per request.
    pub signing_key: Option<Zeroizing<String>>,
    pub fungible_contract: Address,
    pub non_fungible_contract: Option<Address>,
    pub fungible_decimals: u8,
    /// Searched in order; the first directory holding a parseable ABI wins.
    pub abi_search_dirs: Vec<PathBuf>,
    pub confirmation_timeout: Duration,
    pub confirmation_poll_interval: Duration,
    pub network_name: String,
    pub environment: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            signing_key: None,
            fungible_contract: Address::from_str(DEFAULT_FUNGIBLE_CONTRACT_ADDRESS)
                .unwrap_or_default(),
            non_fungible_contract: None,
            fungible_decimals: DEFAULT_FUNGIBLE_DECIMALS,
            abi_search_dirs: ABI_SEARCH_DIRS.iter().map(PathBuf::from).collect(),
            confirmation_timeout: Duration::from_secs(DEFAULT_CONFIRMATION_TIMEOUT_SECONDS),
            confirmation_poll_interval: Duration::from_millis(
                DEFAULT_CONFIRMATION_POLL_INTERVAL_MS,
            ),
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let fungible_contract = match non_empty_var("GLPET_CONTRACT_ADDRESS") {
            Some(value) => parse_contract_address("GLPET_CONTRACT_ADDRESS", &value)?,
            None => defaults.fungible_contract,
        };

        let non_fungible_contract = non_empty_var("GLPETC_CONTRACT_ADDRESS")
            .map(|value| parse_contract_address("GLPETC_CONTRACT_ADDRESS", &value))
            .transpose()?;

        let mut abi_search_dirs = defaults.abi_search_dirs;
        if let Some(dir) = non_empty_var("ABI_DIR") {
            abi_search_dirs.insert(0, PathBuf::from(dir));
        }

        let fungible_decimals = parse_env_or("GLPET_DECIMALS", DEFAULT_FUNGIBLE_DECIMALS)?;
        if fungible_decimals > 77 {
            // 10^78 no longer fits in a U256
            return Err(ConfigError::invalid_value(
                "GLPET_DECIMALS",
                "must be at most 77",
            ));
        }

        Ok(Self {
            rpc_url: non_empty_var("BASE_RPC_URL").unwrap_or(defaults.rpc_url),
            signing_key: non_empty_var("PRIVATE_KEY").map(Zeroizing::new),
            fungible_contract,
            non_fungible_contract,
            fungible_decimals,
            abi_search_dirs,
            confirmation_timeout: Duration::from_secs(parse_env_or(
                "CONFIRMATION_TIMEOUT_SECONDS",
                DEFAULT_CONFIRMATION_TIMEOUT_SECONDS,
            )?),
            confirmation_poll_interval: Duration::from_millis(parse_env_or(
                "CONFIRMATION_POLL_INTERVAL_MS",
                DEFAULT_CONFIRMATION_POLL_INTERVAL_MS,
            )?),
            network_name: non_empty_var("NETWORK_NAME").unwrap_or(defaults.network_name),
            environment: non_empty_var("VERCEL_ENV")
                .or_else(|| non_empty_var("APP_ENV"))
                .unwrap_or(defaults.environment),
        })
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("rpc_url", &mask_rpc_url(&self.rpc_url))
            .field(
                "signing_key",
                &self.signing_key.as_ref().map(|_| "<redacted>"),
            )
            .field("fungible_contract", &self.fungible_contract)
            .field("non_fungible_contract", &self.non_fungible_contract)
            .field("fungible_decimals", &self.fungible_decimals)
            .field("abi_search_dirs", &self.abi_search_dirs)
            .field("confirmation_timeout", &self.confirmation_timeout)
            .field("confirmation_poll_interval", &self.confirmation_poll_interval)
            .field("network_name", &self.network_name)
            .field("environment", &self.environment)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_contract_address(name: &str, value: &str) -> Result<Address, ConfigError> {
    Address::from_str(value).map_err(|_| ConfigError::InvalidAddress {
        name: name.to_string(),
        value: value.to_string(),
    })
}
