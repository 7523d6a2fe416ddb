//! GreenLoop mint relay
//!
//! Mints glPET (ERC-20) and glPETc (ERC-721) reward tokens on an EVM chain on
//! behalf of the GreenLoop web front end.
//!
//! ## Modules
//!
//! * `api` - HTTP routes and controllers
//! * `bootstrap` - Startup wiring
//! * `config` - Environment-driven configuration
//! * `domain` - The mint relay service
//! * `services` - ABI loading and the EVM provider

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod utils;
