//! EVM provider used by the mint relay.
//!
//! Wraps an alloy HTTP provider with a local signing wallet. Gas, nonce and
//! chain id are filled by alloy's recommended fillers, so this module only
//! exposes the three capabilities the relay needs: submit a signed contract
//! call, fetch a receipt, and run a read-only call.

use std::time::Duration;

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::{client::ClientBuilder, types::TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::Http,
};
use async_trait::async_trait;
use log::debug;
use reqwest::ClientBuilder as ReqwestClientBuilder;

#[cfg(test)]
use mockall::automock;

use super::ProviderError;
use crate::models::ReceiptSummary;

/// Chain capabilities the mint relay depends on.
///
/// Implementations share one signing account across concurrent callers.
/// Nonce assignment for that account belongs to the implementation; the
/// relay does not serialize submissions, so an implementation without a
/// nonce manager that tolerates concurrency can produce nonce collisions.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait EvmProviderTrait: Send + Sync {
    /// Address of the account that signs mint transactions.
    fn signer_address(&self) -> Address;

    /// Signs and broadcasts a call to `to` with the given calldata.
    ///
    /// Returns once the node has accepted the transaction into its pool.
    async fn send_contract_call(&self, to: Address, calldata: Bytes)
        -> Result<TxHash, ProviderError>;

    /// Fetches the receipt of a transaction; `None` while it is pending.
    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<ReceiptSummary>, ProviderError>;

    /// Executes a read-only call against the latest block.
    async fn call_contract(&self, to: Address, calldata: Bytes) -> Result<Bytes, ProviderError>;
}

/// [`EvmProviderTrait`] over JSON-RPC with a local private key.
#[derive(Clone)]
pub struct EvmProvider {
    provider: DynProvider,
    signer_address: Address,
}

impl EvmProvider {
    /// Creates a new EVM provider instance.
    ///
    /// # Arguments
    /// * `rpc_url` - JSON-RPC endpoint URL
    /// * `signing_key` - hex encoded secp256k1 private key, with or without `0x`
    /// * `timeout_seconds` - timeout applied to each HTTP round-trip
    pub fn new(
        rpc_url: &str,
        signing_key: &str,
        timeout_seconds: u64,
    ) -> Result<Self, ProviderError> {
        let signer: PrivateKeySigner = signing_key
            .trim()
            .parse()
            .map_err(|e| ProviderError::InvalidSigningKey(format!("{e}")))?;
        let signer_address = signer.address();

        let url: reqwest::Url = rpc_url
            .parse()
            .map_err(|e| ProviderError::NetworkConfiguration(format!("Invalid URL format: {e}")))?;

        // Using use_rustls_tls() forces the use of rustls instead of native-tls to support TLS 1.3
        let http_client = ReqwestClientBuilder::new()
            .timeout(Duration::from_secs(timeout_seconds))
            .use_rustls_tls()
            .build()
            .map_err(|e| ProviderError::Other(format!("Failed to build HTTP client: {e}")))?;

        let transport = Http::with_client(http_client, url);
        let is_local = transport.guess_local();
        let client = ClientBuilder::default().transport(transport, is_local);

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(client)
            .erased();

        Ok(Self {
            provider,
            signer_address,
        })
    }
}

#[async_trait]
impl EvmProviderTrait for EvmProvider {
    fn signer_address(&self) -> Address {
        self.signer_address
    }

    async fn send_contract_call(
        &self,
        to: Address,
        calldata: Bytes,
    ) -> Result<TxHash, ProviderError> {
        let tx = TransactionRequest::default()
            .with_from(self.signer_address)
            .with_to(to)
            .with_input(calldata);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(ProviderError::from)?;

        let tx_hash = *pending.tx_hash();
        debug!("Transaction {tx_hash} accepted by node");
        Ok(tx_hash)
    }

    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<ReceiptSummary>, ProviderError> {
        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(ProviderError::from)?;

        Ok(receipt.as_ref().map(ReceiptSummary::from))
    }

    async fn call_contract(&self, to: Address, calldata: Bytes) -> Result<Bytes, ProviderError> {
        let tx = TransactionRequest::default().with_to(to).with_input(calldata);

        self.provider.call(tx).await.map_err(ProviderError::from)
    }
}
