//! Token minting on behalf of callers.

mod calldata;
mod token_id;
pub use token_id::extract_token_id;

mod relay_service;
pub use relay_service::*;
