//! # Domain Module
//!
//! Core logic of the mint relay, independent of the HTTP layer.

pub mod mint;
pub use mint::*;
