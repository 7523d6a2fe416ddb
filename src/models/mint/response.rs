use alloy::hex;
use serde::{Deserialize, Serialize};

use super::{MintDetails, MintResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FungibleMintResponse {
    pub transaction_hash: String,
    pub block_number: u64,
    pub to: String,
    pub amount: String,
    /// Decimal string, since base-unit values overflow JSON numbers.
    pub amount_in_wei: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonFungibleMintResponse {
    pub transaction_hash: String,
    pub block_number: u64,
    pub to: String,
    pub uri: String,
    pub token_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MintResponse {
    Fungible(FungibleMintResponse),
    NonFungible(NonFungibleMintResponse),
}

impl From<MintResult> for MintResponse {
    fn from(result: MintResult) -> Self {
        let transaction_hash = hex::encode_prefixed(result.transaction_hash);
        let to = result.recipient_address.to_checksum(None);

        match result.details {
            MintDetails::Fungible {
                amount,
                amount_in_base_units,
            } => MintResponse::Fungible(FungibleMintResponse {
                transaction_hash,
                block_number: result.block_number,
                to,
                amount,
                amount_in_wei: amount_in_base_units.to_string(),
            }),
            MintDetails::NonFungible {
                metadata_uri,
                token_id,
            } => MintResponse::NonFungible(NonFungibleMintResponse {
                transaction_hash,
                block_number: result.block_number,
                to,
                uri: metadata_uri,
                token_id: token_id.map(|id| id.to_string()),
            }),
        }
    }
}
