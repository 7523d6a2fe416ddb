//! ABI encoding of the calls the relay makes.

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::Function,
    primitives::{Address, Bytes, U256},
};

use crate::{
    constants::{
        DECIMALS_FALLBACK_DECLARATION, DECIMALS_SIGNATURE, FUNGIBLE_MINT_SIGNATURE,
        NON_FUNGIBLE_MINT_SIGNATURE,
    },
    models::MintError,
    services::LoadedAbi,
};

fn encode(abi: &LoadedAbi, signature: &str, args: &[DynSolValue]) -> Result<Bytes, MintError> {
    let function = abi.function(signature).ok_or_else(|| {
        MintError::Configuration(format!("ABI não declara a função {signature}"))
    })?;

    function
        .abi_encode_input(args)
        .map(Bytes::from)
        .map_err(|e| MintError::Configuration(format!("Falha ao codificar {signature}: {e}")))
}

/// Calldata for `mint(to, amount)`.
pub fn encode_fungible_mint(
    abi: &LoadedAbi,
    to: Address,
    amount: U256,
) -> Result<Bytes, MintError> {
    encode(
        abi,
        FUNGIBLE_MINT_SIGNATURE,
        &[DynSolValue::Address(to), DynSolValue::Uint(amount, 256)],
    )
}

/// Calldata for `safeMint(to, uri)`.
pub fn encode_non_fungible_mint(
    abi: &LoadedAbi,
    to: Address,
    metadata_uri: &str,
) -> Result<Bytes, MintError> {
    encode(
        abi,
        NON_FUNGIBLE_MINT_SIGNATURE,
        &[
            DynSolValue::Address(to),
            DynSolValue::String(metadata_uri.to_string()),
        ],
    )
}

/// The `decimals()` declaration from the ABI, or the ERC-20 standard one.
pub fn decimals_function(abi: Option<&LoadedAbi>) -> Option<Function> {
    abi.and_then(|abi| abi.function(DECIMALS_SIGNATURE).cloned())
        .or_else(|| Function::parse(DECIMALS_FALLBACK_DECLARATION).ok())
}

/// Decodes the return data of `decimals()`.
pub fn decode_decimals(function: &Function, output: &[u8]) -> Option<u8> {
    let values = function.abi_decode_output(output).ok()?;
    let (value, _) = values.first()?.as_uint()?;
    u8::try_from(value).ok()
}
