//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): requests by service, route, status
//! - `relay_request_duration_seconds` (histogram): latency by service, route
//! - `relay_upstream_requests_total` (counter): frontend → backend calls by outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one inbound request and record its latency.
pub fn record_request(service: &'static str, route: &str, status: u16, start: Instant) {
    let route = route.to_string();
    metrics::counter!(
        "relay_requests_total",
        "service" => service,
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "relay_request_duration_seconds",
        "service" => service,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

/// Count one frontend → backend call by outcome label.
pub fn record_upstream(outcome: &'static str) {
    metrics::counter!("relay_upstream_requests_total", "outcome" => outcome).increment(1);
}
