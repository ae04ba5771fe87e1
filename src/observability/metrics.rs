//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mcp_proxy_requests_total` (counter): engine calls by operation and returned status
//! - `mcp_proxy_upstream_duration_seconds` (histogram): engine call latency by operation

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and serve it on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one engine call and the status returned to the caller.
pub fn record_upstream(operation: &'static str, status: u16, start_time: Instant) {
    ::metrics::counter!(
        "mcp_proxy_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("mcp_proxy_upstream_duration_seconds", "operation" => operation)
        .record(start_time.elapsed().as_secs_f64());
}
