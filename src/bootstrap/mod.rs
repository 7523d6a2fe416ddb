//! Initialization routines for the mint relay
//!
//! # Submodules
//!
//! - `initialize_app_state`: Builds the relay service from configuration
mod initialize_app_state;
pub use initialize_app_state::*;
