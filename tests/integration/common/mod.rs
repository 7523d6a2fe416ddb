//! Shared fixtures: a call-counting chain client and app state builders.

use std::{
    path::PathBuf,
    str::FromStr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use actix_web::web;
use alloy::{
    json_abi::Event,
    primitives::{Address, Bytes, TxHash, B256, U256},
};
use async_trait::async_trait;
use greenloop_mint_relayer::{
    config::RelayConfig,
    domain::{ChainClient, MintRelayService},
    models::{AppState, ReceiptLog, ReceiptSummary},
    services::{AbiStore, EvmProviderTrait, ProviderError},
};

pub const RECIPIENT: &str = "0x1111111111111111111111111111111111111111";
pub const NFT_CONTRACT: &str = "0x2222222222222222222222222222222222222222";
pub const SIGNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Chain client that confirms everything immediately and counts calls.
pub struct StubProvider {
    submissions: AtomicUsize,
    receipt_requests: AtomicUsize,
    /// Token id carried by the Transfer log of every receipt, if any.
    minted_token_id: Option<u64>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            submissions: AtomicUsize::new(0),
            receipt_requests: AtomicUsize::new(0),
            minted_token_id: None,
        }
    }

    pub fn minting_token(token_id: u64) -> Self {
        Self {
            minted_token_id: Some(token_id),
            ..Self::new()
        }
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    /// Total number of chain calls of any kind.
    pub fn calls(&self) -> usize {
        self.submissions() + self.receipt_requests.load(Ordering::SeqCst)
    }

    fn transfer_log(&self, token_id: u64) -> ReceiptLog {
        let event = Event::parse(
            "event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)",
        )
        .unwrap();
        ReceiptLog {
            address: Address::from_str(NFT_CONTRACT).unwrap(),
            topics: vec![
                event.selector(),
                B256::ZERO,
                Address::from_str(RECIPIENT).unwrap().into_word(),
                B256::from(U256::from(token_id)),
            ],
            data: Bytes::new(),
        }
    }
}

#[async_trait]
impl EvmProviderTrait for StubProvider {
    fn signer_address(&self) -> Address {
        Address::from_str(SIGNER).unwrap()
    }

    async fn send_contract_call(
        &self,
        _to: Address,
        _calldata: Bytes,
    ) -> Result<TxHash, ProviderError> {
        let count = self.submissions.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(TxHash::from(U256::from(count)))
    }

    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<ReceiptSummary>, ProviderError> {
        self.receipt_requests.fetch_add(1, Ordering::SeqCst);
        Ok(Some(ReceiptSummary {
            transaction_hash: tx_hash,
            block_number: Some(100),
            success: true,
            logs: self
                .minted_token_id
                .map(|id| vec![self.transfer_log(id)])
                .unwrap_or_default(),
        }))
    }

    async fn call_contract(&self, _to: Address, _calldata: Bytes) -> Result<Bytes, ProviderError> {
        let mut word = [0u8; 32];
        word[31] = 18;
        Ok(Bytes::from(word.to_vec()))
    }
}

/// Relay configuration reading the ABIs shipped in the repository.
pub fn relay_config(non_fungible_contract: Option<&str>) -> RelayConfig {
    RelayConfig {
        non_fungible_contract: non_fungible_contract.map(|a| Address::from_str(a).unwrap()),
        abi_search_dirs: vec![PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("abi")],
        confirmation_timeout: Duration::from_secs(1),
        confirmation_poll_interval: Duration::from_millis(10),
        ..RelayConfig::default()
    }
}

pub fn app_state(
    provider: Arc<StubProvider>,
    non_fungible_contract: Option<&str>,
) -> web::Data<AppState> {
    let config = relay_config(non_fungible_contract);
    let abis = AbiStore::load(&config.abi_search_dirs);
    web::Data::new(AppState::new(MintRelayService::new(
        config,
        abis,
        ChainClient::Ready(provider),
    )))
}

pub fn app_state_without_signer() -> web::Data<AppState> {
    let config = relay_config(None);
    let abis = AbiStore::load(&config.abi_search_dirs);
    web::Data::new(AppState::new(MintRelayService::new(
        config,
        abis,
        ChainClient::Unavailable("PRIVATE_KEY não configurada".to_string()),
    )))
}
