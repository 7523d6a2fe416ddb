use alloy::{
    dyn_abi::EventExt,
    json_abi::Event,
    primitives::{Address, U256},
};
use log::debug;

use crate::{
    constants::{ERC721_TRANSFER_DECLARATION, TOKEN_ID_PARAM, TRANSFER_EVENT},
    models::ReceiptLog,
    services::LoadedAbi,
};

/// Extracts the minted token id from the `Transfer` log of a receipt.
///
/// Only logs emitted by `contract` are considered. The event declaration
/// comes from the contract ABI when it has one, otherwise the ERC-721
/// standard declaration is used. Returns `None` when no log decodes.
pub fn extract_token_id(
    abi: Option<&LoadedAbi>,
    contract: Address,
    logs: &[ReceiptLog],
) -> Option<U256> {
    let event = abi
        .and_then(|abi| abi.event(TRANSFER_EVENT).cloned())
        .or_else(|| Event::parse(ERC721_TRANSFER_DECLARATION).ok())?;
    let selector = event.selector();

    logs.iter()
        .filter(|log| log.address == contract)
        .filter(|log| log.topics.first() == Some(&selector))
        .find_map(|log| decode_token_id(&event, log))
}

fn decode_token_id(event: &Event, log: &ReceiptLog) -> Option<U256> {
    let decoded = match event.decode_log_parts(log.topics.iter().copied(), &log.data) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!("Transfer log did not decode: {e}");
            return None;
        }
    };

    // Fall back to the last uint parameter when the ABI names it differently.
    let position = event
        .inputs
        .iter()
        .position(|param| param.name == TOKEN_ID_PARAM)
        .or_else(|| event.inputs.iter().rposition(|param| param.ty.starts_with("uint")))?;
    let param = &event.inputs[position];

    // Decoded values are split into indexed and body lists, each in declaration order.
    let index_in_group = event.inputs[..position]
        .iter()
        .filter(|p| p.indexed == param.indexed)
        .count();
    let value = if param.indexed {
        decoded.indexed.get(index_in_group)?
    } else {
        decoded.body.get(index_in_group)?
    };

    value.as_uint().map(|(id, _)| id)
}
