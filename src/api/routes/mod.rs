//! # API Routes Module
//!
//! Configures HTTP routes for the mint relay.
//!
//! ## Routes
//!
//! * `/health` - Relay status
//! * `/mint/erc20`, `/mint/erc721` - Token minting
//! * `/metrics` - Prometheus metrics

pub mod health;
pub mod metrics;
pub mod mint;

use actix_web::{web, HttpResponse, Route};

use crate::models::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(mint::init)
        .configure(metrics::init);
}

/// Fallback route of a resource, answering 405 with the allowed method.
pub(crate) fn method_not_allowed(allowed: &'static str) -> Route {
    web::route().to(move || async move { Err::<HttpResponse, _>(ApiError::MethodNotAllowed(allowed)) })
}
