//! This module provides the HTTP endpoint for scraping metrics.
//!
//! # Endpoints
//!
//! - `/metrics`: Returns every registered metric in the Prometheus text format.

use actix_web::{web, HttpResponse, Responder};
use prometheus::{Encoder, TextEncoder};

use crate::metrics::gather_metrics;

/// Returns all metrics in plain text format.
async fn scrape_metrics() -> impl Responder {
    match gather_metrics() {
        Ok(body) => HttpResponse::Ok()
            .content_type(TextEncoder::new().format_type())
            .body(body),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {e}")),
    }
}

/// Initializes the HTTP services for the metrics module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(scrape_metrics));
}
