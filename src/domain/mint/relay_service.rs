//! The mint relay: validate, encode, submit, await confirmation, report.

use std::{sync::Arc, time::Instant};

use alloy::{
    dyn_abi::JsonAbiExt,
    hex,
    primitives::{Address, Bytes, TxHash},
};
use log::{error, info, warn};
use strum::AsRefStr;

use crate::{
    config::RelayConfig,
    constants::UNCONFIGURED,
    metrics::{CONFIRMATION_LATENCY, MINT_REQUESTS},
    models::{
        ContractAddresses, MintDetails, MintError, MintFungibleRequest, MintNonFungibleRequest,
        MintResult, ReceiptSummary, RelayStatus, TokenStandard,
    },
    services::{AbiStore, EvmProviderTrait},
    utils::{parse_evm_address, parse_token_amount, poll_until_ready, PollOutcome},
};

use super::{
    calldata::{decimals_function, decode_decimals, encode_fungible_mint, encode_non_fungible_mint},
    token_id::extract_token_id,
};

const MISSING_FUNGIBLE_PARAMS: &str = "Parâmetros obrigatórios: to (endereço) e amount (quantidade)";
const MISSING_NON_FUNGIBLE_PARAMS: &str =
    "Parâmetros obrigatórios: to (endereço) e uri (URI do token)";
const INVALID_ADDRESS: &str = "Endereço inválido";

/// The signing chain client, or why there is none.
#[derive(Clone)]
pub enum ChainClient {
    Ready(Arc<dyn EvmProviderTrait>),
    /// Minting is refused with this message as a configuration error.
    Unavailable(String),
}

/// Terminal state of a mint request, used as the `outcome` metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum MintOutcome {
    Confirmed,
    Rejected,
    SubmissionFailed,
    Reverted,
    TimedOut,
}

impl MintOutcome {
    pub fn of(result: &Result<MintResult, MintError>) -> Self {
        match result {
            Ok(_) => MintOutcome::Confirmed,
            Err(MintError::Validation(_) | MintError::Configuration(_)) => MintOutcome::Rejected,
            Err(MintError::Submission(_)) => MintOutcome::SubmissionFailed,
            Err(MintError::Reverted { .. }) => MintOutcome::Reverted,
            Err(MintError::ConfirmationTimeout { .. }) => MintOutcome::TimedOut,
        }
    }
}

/// Result of comparing the configured glPET decimals with the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalsCheck {
    Matches(u8),
    Mismatch { configured: u8, on_chain: u8 },
    /// The contract could not be queried; nothing was compared.
    Unavailable(String),
}

/// Mints glPET and glPETc on behalf of callers.
///
/// Holds no per-request state; one instance is shared by all handlers.
pub struct MintRelayService {
    config: RelayConfig,
    abis: AbiStore,
    chain_client: ChainClient,
}

impl MintRelayService {
    pub fn new(config: RelayConfig, abis: AbiStore, chain_client: ChainClient) -> Self {
        Self {
            config,
            abis,
            chain_client,
        }
    }

    /// Mints `amount` glPET to the recipient.
    pub async fn mint_fungible(
        &self,
        request: MintFungibleRequest,
    ) -> Result<MintResult, MintError> {
        let result = self.try_mint_fungible(request).await;
        record_outcome(TokenStandard::Erc20, &result);
        result
    }

    /// Mints one glPETc with the given metadata URI to the recipient.
    pub async fn mint_non_fungible(
        &self,
        request: MintNonFungibleRequest,
    ) -> Result<MintResult, MintError> {
        let result = self.try_mint_non_fungible(request).await;
        record_outcome(TokenStandard::Erc721, &result);
        result
    }

    async fn try_mint_fungible(
        &self,
        request: MintFungibleRequest,
    ) -> Result<MintResult, MintError> {
        let amount = request.amount.trim();
        if is_blank(&request.recipient_address) || amount.is_empty() {
            return Err(MintError::Validation(MISSING_FUNGIBLE_PARAMS.to_string()));
        }
        let recipient = validate_address(&request.recipient_address)?;
        let amount_in_base_units = parse_token_amount(amount, self.config.fungible_decimals)
            .map_err(|e| MintError::Validation(format!("Quantidade inválida: {e}")))?;

        let abi = self.abis.fungible.as_ref().ok_or_else(|| {
            MintError::Configuration("Não foi possível carregar o ABI do contrato glPET".into())
        })?;
        let provider = self.provider()?;

        let calldata = encode_fungible_mint(abi, recipient, amount_in_base_units)?;
        info!("Minting {amount} glPET ({amount_in_base_units} base units) to {recipient}");

        let (transaction_hash, receipt) = self
            .submit_and_confirm(
                TokenStandard::Erc20,
                provider,
                self.config.fungible_contract,
                calldata,
            )
            .await?;

        Ok(MintResult {
            transaction_hash,
            block_number: receipt.block_number.unwrap_or_default(),
            recipient_address: recipient,
            details: MintDetails::Fungible {
                amount: amount.to_string(),
                amount_in_base_units,
            },
        })
    }

    async fn try_mint_non_fungible(
        &self,
        request: MintNonFungibleRequest,
    ) -> Result<MintResult, MintError> {
        let metadata_uri = request.metadata_uri.as_str();
        if is_blank(&request.recipient_address) || is_blank(metadata_uri) {
            return Err(MintError::Validation(
                MISSING_NON_FUNGIBLE_PARAMS.to_string(),
            ));
        }
        let recipient = validate_address(&request.recipient_address)?;

        let contract = self.config.non_fungible_contract.ok_or_else(|| {
            MintError::Configuration(format!("Endereço do contrato glPETc {UNCONFIGURED}"))
        })?;
        let abi = self.abis.non_fungible.as_ref().ok_or_else(|| {
            MintError::Configuration("Não foi possível carregar o ABI do contrato glPETc".into())
        })?;
        let provider = self.provider()?;

        let calldata = encode_non_fungible_mint(abi, recipient, metadata_uri)?;
        info!("Minting glPETc to {recipient} with URI {metadata_uri}");

        let (transaction_hash, receipt) = self
            .submit_and_confirm(TokenStandard::Erc721, provider, contract, calldata)
            .await?;

        let token_id = extract_token_id(Some(abi), contract, &receipt.logs);
        if token_id.is_none() {
            warn!("No decodable Transfer log in receipt of {transaction_hash}");
        }

        Ok(MintResult {
            transaction_hash,
            block_number: receipt.block_number.unwrap_or_default(),
            recipient_address: recipient,
            details: MintDetails::NonFungible {
                metadata_uri: metadata_uri.to_string(),
                token_id,
            },
        })
    }

    fn provider(&self) -> Result<&dyn EvmProviderTrait, MintError> {
        match &self.chain_client {
            ChainClient::Ready(provider) => Ok(provider.as_ref()),
            ChainClient::Unavailable(reason) => Err(MintError::Configuration(reason.clone())),
        }
    }

    /// Submits the call and polls for its receipt.
    ///
    /// A receipt only counts once it carries a block number. A receipt with
    /// a failed status is reported as [`MintError::Reverted`].
    async fn submit_and_confirm(
        &self,
        standard: TokenStandard,
        provider: &dyn EvmProviderTrait,
        contract: Address,
        calldata: Bytes,
    ) -> Result<(TxHash, ReceiptSummary), MintError> {
        let tx_hash = provider
            .send_contract_call(contract, calldata)
            .await
            .map_err(MintError::Submission)?;
        info!("{standard} mint submitted: {tx_hash}");

        let started = Instant::now();
        let timeout = self.config.confirmation_timeout;
        let outcome = poll_until_ready(
            || async move {
                provider
                    .get_transaction_receipt(tx_hash)
                    .await
                    .map(|receipt| receipt.filter(|r| r.block_number.is_some()))
            },
            timeout,
            self.config.confirmation_poll_interval,
            "mint confirmation",
        )
        .await;

        match outcome {
            PollOutcome::Ready(receipt) => {
                CONFIRMATION_LATENCY
                    .with_label_values(&[standard.as_ref()])
                    .observe(started.elapsed().as_secs_f64());

                if !receipt.success {
                    return Err(MintError::Reverted {
                        tx_hash: hex::encode_prefixed(tx_hash),
                        block_number: receipt.block_number,
                    });
                }

                info!(
                    "{standard} mint {tx_hash} confirmed in block {:?}",
                    receipt.block_number
                );
                Ok((tx_hash, receipt))
            }
            PollOutcome::TimedOut { last_error } => Err(MintError::ConfirmationTimeout {
                tx_hash: hex::encode_prefixed(tx_hash),
                waited: timeout,
                last_error,
            }),
        }
    }

    /// Snapshot for `/health`. Never fails.
    pub fn status(&self) -> RelayStatus {
        let signer = match &self.chain_client {
            ChainClient::Ready(provider) => provider.signer_address().to_checksum(None),
            ChainClient::Unavailable(_) => UNCONFIGURED.to_string(),
        };

        RelayStatus {
            network: self.config.network_name.clone(),
            signer,
            contracts: ContractAddresses {
                fungible: self.config.fungible_contract.to_checksum(None),
                non_fungible: self
                    .config
                    .non_fungible_contract
                    .map(|address| address.to_checksum(None))
                    .unwrap_or_else(|| UNCONFIGURED.to_string()),
            },
            environment: self.config.environment.clone(),
        }
    }

    /// Reads `decimals()` from the glPET contract and compares it with the
    /// configured value.
    pub async fn check_fungible_decimals(&self) -> DecimalsCheck {
        let provider = match self.provider() {
            Ok(provider) => provider,
            Err(e) => return DecimalsCheck::Unavailable(e.to_string()),
        };
        let Some(function) = decimals_function(self.abis.fungible.as_ref()) else {
            return DecimalsCheck::Unavailable("decimals() declaration unavailable".to_string());
        };
        let calldata = match function.abi_encode_input(&[]) {
            Ok(data) => Bytes::from(data),
            Err(e) => return DecimalsCheck::Unavailable(e.to_string()),
        };

        let output = match provider
            .call_contract(self.config.fungible_contract, calldata)
            .await
        {
            Ok(output) => output,
            Err(e) => return DecimalsCheck::Unavailable(e.to_string()),
        };

        let configured = self.config.fungible_decimals;
        match decode_decimals(&function, &output) {
            Some(on_chain) if on_chain == configured => DecimalsCheck::Matches(on_chain),
            Some(on_chain) => DecimalsCheck::Mismatch {
                configured,
                on_chain,
            },
            None => DecimalsCheck::Unavailable(format!(
                "unexpected decimals() output: {}",
                hex::encode_prefixed(&output)
            )),
        }
    }
}

/// Blank means empty or whitespace only. Non-blank values are validated as sent.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn validate_address(value: &str) -> Result<Address, MintError> {
    parse_evm_address(value).ok_or_else(|| MintError::Validation(INVALID_ADDRESS.to_string()))
}

fn record_outcome(standard: TokenStandard, result: &Result<MintResult, MintError>) {
    let outcome = MintOutcome::of(result);
    MINT_REQUESTS
        .with_label_values(&[standard.as_ref(), outcome.as_ref()])
        .inc();

    match result {
        Err(e) if e.is_rejection() => warn!("{standard} mint rejected: {e}"),
        Err(e) => {
            let transient = match e {
                MintError::Submission(provider_error) => provider_error.is_transient(),
                _ => false,
            };
            error!(
                "{standard} mint failed (safe to retry: {}, transient: {transient}): {e}: {}",
                e.is_retryable(),
                e.details().unwrap_or_default()
            );
        }
        Ok(_) => {}
    }
}
