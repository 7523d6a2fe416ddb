//! Application state initialization
//!
//! Loads contract ABIs, builds the signing chain client when a key is
//! configured, and checks the configured glPET decimals against the chain.
use std::sync::Arc;

use actix_web::web;
use color_eyre::Result;
use log::{error, info, warn};

use crate::{
    config::{RelayConfig, ServerConfig},
    domain::{ChainClient, DecimalsCheck, MintRelayService},
    models::AppState,
    services::{AbiStore, EvmProvider, EvmProviderTrait},
};

/// Builds the chain client, or records why minting is unavailable.
///
/// A missing or unusable key is not fatal: the server still starts and
/// reports the signer as unconfigured.
pub fn initialize_chain_client(
    relay_config: &RelayConfig,
    server_config: &ServerConfig,
) -> ChainClient {
    let Some(signing_key) = relay_config.signing_key.as_ref() else {
        error!("PRIVATE_KEY not set; mint endpoints will fail until it is configured");
        return ChainClient::Unavailable("PRIVATE_KEY não configurada".to_string());
    };

    match EvmProvider::new(
        &relay_config.rpc_url,
        signing_key.as_str(),
        server_config.rpc_timeout_seconds(),
    ) {
        Ok(provider) => {
            info!(
                "Minting as {} on {}",
                provider.signer_address().to_checksum(None),
                relay_config.network_name
            );
            ChainClient::Ready(Arc::new(provider))
        }
        Err(e) => {
            error!("Failed to initialize EVM provider: {e}");
            ChainClient::Unavailable(format!("PRIVATE_KEY inválida: {e}"))
        }
    }
}

/// Logs the outcome of the startup decimals check. Never fails startup.
pub async fn verify_fungible_decimals(relay: &MintRelayService) {
    match relay.check_fungible_decimals().await {
        DecimalsCheck::Matches(decimals) => info!("glPET decimals confirmed: {decimals}"),
        DecimalsCheck::Mismatch {
            configured,
            on_chain,
        } => warn!(
            "GLPET_DECIMALS is {configured} but the contract reports {on_chain}; amounts are scaled by {configured}"
        ),
        DecimalsCheck::Unavailable(reason) => {
            warn!("Could not verify glPET decimals: {reason}")
        }
    }
}

/// Initializes application state
///
/// # Returns
///
/// * `Result<web::Data<AppState>>` - Initialized application state
pub async fn initialize_app_state(
    relay_config: RelayConfig,
    server_config: &ServerConfig,
) -> Result<web::Data<AppState>> {
    info!("Relay configuration: {relay_config:?}");

    let abis = AbiStore::load(&relay_config.abi_search_dirs);
    let chain_client = initialize_chain_client(&relay_config, server_config);
    let verify_decimals = matches!(chain_client, ChainClient::Ready(_));

    let relay = MintRelayService::new(relay_config, abis, chain_client);
    if verify_decimals {
        verify_fungible_decimals(&relay).await;
    }

    Ok(web::Data::new(AppState::new(relay)))
}
