//! Metrics collection and exposition.
//!
//! # Metrics
//! - `header_guard_headers_written_total` (counter): security headers written, by header
//! - `header_guard_requests_total` (counter): responses served, by status
//!
//! # Design Decisions
//! - Recording without an installed recorder is a no-op
//! - The Prometheus exporter serves its own listener

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const HEADERS_WRITTEN_TOTAL: &str = "header_guard_headers_written_total";
pub const REQUESTS_TOTAL: &str = "header_guard_requests_total";

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_header_written(header: &str) {
    metrics::counter!(HEADERS_WRITTEN_TOTAL, "header" => header.to_string()).increment(1);
}

pub fn record_request(status: u16) {
    metrics::counter!(REQUESTS_TOTAL, "status" => status.to_string()).increment(1);
}
