//! Health check controller.

use actix_web::HttpResponse;

use crate::{domain::MintRelayService, models::HealthResponse};

/// Reports network, signer and contract configuration. Always `200 OK`.
pub fn health(relay: &MintRelayService) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::from(relay.status()))
}
