//! # API Controllers Module
//!
//! Handles HTTP endpoint logic for the mint relay.
//!
//! ## Controllers
//!
//! * `health` - Relay status
//! * `mint` - glPET and glPETc minting

pub mod health;
pub mod mint;
