//! Chain access for the relay: error categorization and the EVM provider.

use alloy::transports::RpcError;
use serde::Serialize;
use thiserror::Error;

pub mod evm;
pub use evm::*;

#[derive(Error, Debug, Serialize)]
pub enum ProviderError {
    #[error("Invalid signing key: {0}")]
    InvalidSigningKey(String),
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
    #[error("Request timeout")]
    Timeout,
    #[error("Rate limited (HTTP 429)")]
    RateLimited,
    #[error("Bad gateway (HTTP 502)")]
    BadGateway,
    #[error("Request error (HTTP {status_code}): {error}")]
    RequestError { error: String, status_code: u16 },
    #[error("JSON-RPC error (code {code}): {message}")]
    RpcErrorCode { code: i64, message: String },
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Other provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// Determines if this error is transient (can retry) or permanent (should fail).
    pub fn is_transient(&self) -> bool {
        is_retriable_error(self)
    }
}

/// Categorizes a reqwest error into an appropriate `ProviderError` variant.
///
/// - Timeout errors become `ProviderError::Timeout`
/// - HTTP 429 responses become `ProviderError::RateLimited`
/// - HTTP 502 responses become `ProviderError::BadGateway`
/// - Other HTTP statuses become `ProviderError::RequestError`
/// - Everything else becomes `ProviderError::Other`
fn categorize_reqwest_error(err: &reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::Timeout;
    }

    if let Some(status) = err.status() {
        return match status.as_u16() {
            429 => ProviderError::RateLimited,
            502 => ProviderError::BadGateway,
            status_code => ProviderError::RequestError {
                error: err.to_string(),
                status_code,
            },
        };
    }

    ProviderError::Other(err.to_string())
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        categorize_reqwest_error(&err)
    }
}

// Generic implementation for all RpcError types
impl<E> From<RpcError<E>> for ProviderError
where
    E: std::fmt::Display + std::any::Any + 'static,
{
    fn from(err: RpcError<E>) -> Self {
        match err {
            RpcError::Transport(transport_err) => {
                if let Some(reqwest_err) =
                    (&transport_err as &dyn std::any::Any).downcast_ref::<reqwest::Error>()
                {
                    return categorize_reqwest_error(reqwest_err);
                }

                ProviderError::TransportError(transport_err.to_string())
            }
            RpcError::ErrorResp(json_rpc_err) => ProviderError::RpcErrorCode {
                code: json_rpc_err.code,
                message: json_rpc_err.message.to_string(),
            },
            _ => ProviderError::Other(format!("Other RPC error: {err}")),
        }
    }
}

// Errors that are retriable
pub fn is_retriable_error(error: &ProviderError) -> bool {
    match error {
        ProviderError::Timeout
        | ProviderError::RateLimited
        | ProviderError::BadGateway
        | ProviderError::TransportError(_) => true,

        ProviderError::RequestError { status_code, .. } => match *status_code {
            // Non-retriable 5xx: persistent server-side issues
            501 | 505 => false,
            500..=599 => true,
            408 | 425 => true,
            _ => false,
        },

        // Node-side rejections (nonce too low, execution reverted, ...) repeat on retry
        ProviderError::RpcErrorCode { .. } => false,

        ProviderError::InvalidSigningKey(_)
        | ProviderError::NetworkConfiguration(_)
        | ProviderError::Other(_) => false,
    }
}
