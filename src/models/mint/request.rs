use serde::{Deserialize, Serialize};

use crate::utils::serde::deserialize_string_or_number;

/// Body of `POST /mint/erc20`.
///
/// Missing or null fields deserialize to empty strings and are rejected by
/// request validation with the usual 400 envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MintFungibleRequest {
    #[serde(
        rename = "to",
        default,
        deserialize_with = "deserialize_string_or_number"
    )]
    pub recipient_address: String,
    /// Human-readable amount, e.g. `"100.5"`. JSON numbers are accepted too.
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub amount: String,
}

/// Body of `POST /mint/erc721`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MintNonFungibleRequest {
    #[serde(
        rename = "to",
        default,
        deserialize_with = "deserialize_string_or_number"
    )]
    pub recipient_address: String,
    #[serde(
        rename = "uri",
        default,
        deserialize_with = "deserialize_string_or_number"
    )]
    pub metadata_uri: String,
}
