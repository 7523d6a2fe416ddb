//! # API Module
//!
//! HTTP adapter of the mint relay.
//!
//! ## Structure
//!
//! * `controllers` - Translate requests into relay calls and results into responses
//! * `routes` - Endpoint definitions and routing

use actix_web::web;

use crate::models::ApiError;

pub mod controllers;

pub mod routes;

/// JSON extractor configuration answering malformed bodies with the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Corpo da requisição inválido: {err}")).into()
    })
}

/// Mounts every route under `/api` and at the root.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::scope("/api").configure(routes::configure_routes))
        .configure(routes::configure_routes);
}
