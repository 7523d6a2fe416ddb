use std::time::Duration;

use serde::Serialize;
use strum::AsRefStr;
use thiserror::Error;

use crate::services::ProviderError;

/// Why a mint request did not reach a confirmed state.
///
/// The variants differ in what the caller may safely do next:
/// `Validation` and `Configuration` had no side effect, `Submission`
/// failed before the node accepted the transaction and may be retried,
/// `Reverted` executed on-chain and must not be blindly retried, and
/// `ConfirmationTimeout` has an unknown outcome that has to be reconciled
/// against the chain before any retry.
#[derive(Error, Debug)]
pub enum MintError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Erro ao enviar transação de mint")]
    Submission(#[source] ProviderError),

    #[error("Transação revertida on-chain")]
    Reverted {
        tx_hash: String,
        block_number: Option<u64>,
    },

    #[error("Transação não confirmada dentro de {waited:?}")]
    ConfirmationTimeout {
        tx_hash: String,
        waited: Duration,
        last_error: Option<String>,
    },
}

/// Stable identifier of a [`MintError`] variant, exposed in API error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MintErrorKind {
    ValidationError,
    ConfigurationError,
    SubmissionError,
    Reverted,
    ConfirmationTimeout,
}

impl MintError {
    pub fn kind(&self) -> MintErrorKind {
        match self {
            MintError::Validation(_) => MintErrorKind::ValidationError,
            MintError::Configuration(_) => MintErrorKind::ConfigurationError,
            MintError::Submission(_) => MintErrorKind::SubmissionError,
            MintError::Reverted { .. } => MintErrorKind::Reverted,
            MintError::ConfirmationTimeout { .. } => MintErrorKind::ConfirmationTimeout,
        }
    }

    /// Whether resubmitting the same request cannot produce a duplicate mint.
    ///
    /// Only submission failures qualify. `is_transient` on the wrapped
    /// provider error tells whether a retry is likely to succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MintError::Submission(_))
    }

    /// Diagnostic detail preserved from the failing layer.
    pub fn details(&self) -> Option<String> {
        match self {
            MintError::Validation(_) | MintError::Configuration(_) => None,
            MintError::Submission(err) => Some(err.to_string()),
            MintError::Reverted {
                tx_hash,
                block_number,
            } => Some(match block_number {
                Some(block) => format!("transaction {tx_hash} reverted in block {block}"),
                None => format!("transaction {tx_hash} reverted"),
            }),
            MintError::ConfirmationTimeout {
                tx_hash,
                last_error,
                ..
            } => Some(match last_error {
                Some(err) => format!("transaction {tx_hash} pending; last receipt error: {err}"),
                None => format!("transaction {tx_hash} pending"),
            }),
        }
    }

    /// Whether the failure happened before anything was sent to the chain.
    pub fn is_rejection(&self) -> bool {
        matches!(self, MintError::Validation(_) | MintError::Configuration(_))
    }
}
