//! Process-wide configuration, read from the environment once at startup.

mod error;
pub use error::*;

mod server_config;
pub use server_config::*;

mod relay_config;
pub use relay_config::*;
