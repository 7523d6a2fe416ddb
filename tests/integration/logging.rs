//! Integration test for file logging.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level; default is "info"
//! - LOG_FILE_PATH: when using file mode, the path of the log file
//!   Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use greenloop_mint_relayer::logging::{rolled_file_path, setup_logging};
use serial_test::serial;
use std::{env, path::Path};
use tempfile::TempDir;

#[test]
#[serial]
fn test_setup_logging_file_mode_creates_log_file() {
    let log_dir = TempDir::new().unwrap();
    let base = log_dir.path().join("nested").join("mint-relayer.log");
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_FILE_PATH", base.to_str().unwrap());

    setup_logging();

    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let expected_path = rolled_file_path(base.to_str().unwrap(), &date_str);
    assert!(
        Path::new(&expected_path).exists(),
        "Expected log file {expected_path} does not exist"
    );

    env::remove_var("LOG_MODE");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_FILE_PATH");
}
