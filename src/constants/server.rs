pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 3001;

/// Default timeout for a single RPC round-trip, in milliseconds.
pub const DEFAULT_RPC_TIMEOUT_MS: u64 = 10_000;

/// Upper bound on the wait for a mint transaction to be included.
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECONDS: u64 = 120;

pub const DEFAULT_CONFIRMATION_POLL_INTERVAL_MS: u64 = 2_000;

/// Default client disconnect timeout in seconds.
/// This is the time the server waits for cleanup after a client disconnects.
pub const DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS: u64 = 5;
