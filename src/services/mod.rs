//! # Services Module
//!
//! External integrations of the relay: contract ABIs on disk and the EVM
//! JSON-RPC provider.

mod abi;
pub use abi::*;

mod provider;
pub use provider::*;
