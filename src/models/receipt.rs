use alloy::{
    network::ReceiptResponse,
    primitives::{Address, Bytes, TxHash, B256},
};

/// The parts of a transaction receipt the relay inspects.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptSummary {
    pub transaction_hash: TxHash,
    /// `None` while the node reports the transaction as pending.
    pub block_number: Option<u64>,
    /// Execution status; `false` means the transaction reverted.
    pub success: bool,
    pub logs: Vec<ReceiptLog>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}

impl From<&alloy::rpc::types::TransactionReceipt> for ReceiptSummary {
    fn from(receipt: &alloy::rpc::types::TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            success: ReceiptResponse::status(receipt),
            logs: receipt
                .inner
                .logs()
                .iter()
                .map(|log| ReceiptLog {
                    address: log.address(),
                    topics: log.topics().to_vec(),
                    data: log.data().data.clone(),
                })
                .collect(),
        }
    }
}
