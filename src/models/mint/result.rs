use alloy::primitives::{Address, TxHash, U256};
use strum::{AsRefStr, Display};

/// Token standard a mint request targets. Used as a log and metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TokenStandard {
    Erc20,
    Erc721,
}

/// Outcome of a confirmed mint.
#[derive(Debug, Clone, PartialEq)]
pub struct MintResult {
    pub transaction_hash: TxHash,
    pub block_number: u64,
    pub recipient_address: Address,
    pub details: MintDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MintDetails {
    Fungible {
        /// Amount as requested.
        amount: String,
        /// `amount` scaled by the token decimals.
        amount_in_base_units: U256,
    },
    NonFungible {
        metadata_uri: String,
        /// `None` when no Transfer log could be decoded; the mint itself succeeded.
        token_id: Option<U256>,
    },
}

impl MintResult {
    pub fn standard(&self) -> TokenStandard {
        match self.details {
            MintDetails::Fungible { .. } => TokenStandard::Erc20,
            MintDetails::NonFungible { .. } => TokenStandard::Erc721,
        }
    }

    pub fn token_id(&self) -> Option<U256> {
        match &self.details {
            MintDetails::NonFungible { token_id, .. } => *token_id,
            MintDetails::Fungible { .. } => None,
        }
    }
}
