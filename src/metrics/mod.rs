//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines the mint relay metrics.

use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

lazy_static! {
    // Global Prometheus registry.
    pub static ref REGISTRY: Registry = Registry::new();

    // Counter: mint requests by token standard and terminal outcome.
    pub static ref MINT_REQUESTS: CounterVec = {
        let opts = Opts::new("mint_requests_total", "Total number of mint requests by outcome");
        let counter_vec = CounterVec::new(opts, &["token", "outcome"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Histogram: time from submission to confirmed receipt.
    pub static ref CONFIRMATION_LATENCY: HistogramVec = {
        let histogram_opts = HistogramOpts::new(
            "mint_confirmation_seconds",
            "Time from transaction submission to confirmation in seconds",
        )
        .buckets(vec![0.5, 1.0, 2.0, 4.0, 8.0, 15.0, 30.0, 60.0, 120.0, 300.0]);
        let histogram_vec = HistogramVec::new(histogram_opts, &["token"]).unwrap();
        REGISTRY.register(Box::new(histogram_vec.clone())).unwrap();
        histogram_vec
    };
}

/// Gather all metrics and encode into the Prometheus text format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}
