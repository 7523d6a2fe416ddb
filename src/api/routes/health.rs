//! This module provides the health check endpoint.
//!
//! `/health` reports the network, signer and contract configuration of the
//! relay. It never fails, even when minting is not configured.
use actix_web::{web, HttpResponse};

use super::method_not_allowed;
use crate::{api::controllers::health, models::AppState};

async fn health_handler(data: web::Data<AppState>) -> HttpResponse {
    health::health(&data.relay)
}

/// Initializes the health check routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_handler))
            .default_service(method_not_allowed("GET")),
    );
}
