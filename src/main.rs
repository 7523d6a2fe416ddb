//! GreenLoop mint relay server.
//!
//! Loads configuration from the environment (and `.env`), builds the relay
//! and serves the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{
    middleware::{self, Logger},
    App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use greenloop_mint_relayer::{
    api,
    bootstrap::initialize_app_state,
    config::{RelayConfig, ServerConfig},
    constants::DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS,
    logging::setup_logging,
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Load environment variables from .env file
    dotenv().ok();
    setup_logging();

    let server_config = ServerConfig::from_env().wrap_err("Invalid server configuration")?;
    let relay_config = RelayConfig::from_env().wrap_err("Invalid relay configuration")?;

    let app_state = initialize_app_state(relay_config, &server_config).await?;

    info!(
        "Starting server on {}:{}",
        server_config.host, server_config.port
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(api::configure)
    })
    .client_disconnect_timeout(Duration::from_secs(
        DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS,
    ))
    .bind((server_config.host.as_str(), server_config.port))
    .wrap_err_with(|| {
        format!(
            "Failed to bind {}:{}",
            server_config.host, server_config.port
        )
    })?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server terminated with an error")
}
