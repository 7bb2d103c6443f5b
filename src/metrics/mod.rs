//! Service Metrics
//!
//! Prometheus-compatible metrics for monitoring the service itself:
//! - API request metrics (latency, count, in-flight)
//! - Record store reads (outcome, record count)
//! - Region lookups (requested vs resolved)

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};

/// Metric names as constants for consistency
pub mod names {
    // API Metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "http_requests_in_flight";

    // Store Metrics
    pub const STORE_LOADS_TOTAL: &str = "store_loads_total";
    pub const RECORDS_LOADED: &str = "records_loaded";

    // Region Metrics
    pub const REGIONS_REQUESTED_TOTAL: &str = "regions_requested_total";
    pub const REGIONS_RESOLVED_TOTAL: &str = "regions_resolved_total";
}

/// Label keys
pub mod labels {
    pub const METHOD: &str = "method";
    pub const ENDPOINT: &str = "endpoint";
    pub const STATUS: &str = "status";
    pub const OUTCOME: &str = "outcome";
}

/// Initialize Prometheus metrics exporter
///
/// Returns a handle that can be used to render metrics
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        // HTTP request duration buckets (in seconds)
        .set_buckets_for_metric(
            Matcher::Full(names::HTTP_REQUEST_DURATION_SECONDS.to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
        )?
        .install_recorder()
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request
pub fn record_http_request(method: &str, endpoint: &str, status: u16, duration_secs: f64) {
    let status_str = status.to_string();
    counter!(
        names::HTTP_REQUESTS_TOTAL,
        labels::METHOD => method.to_string(),
        labels::ENDPOINT => endpoint.to_string(),
        labels::STATUS => status_str.clone()
    )
    .increment(1);

    histogram!(
        names::HTTP_REQUEST_DURATION_SECONDS,
        labels::METHOD => method.to_string(),
        labels::ENDPOINT => endpoint.to_string(),
        labels::STATUS => status_str
    )
    .record(duration_secs);
}

/// Adjust the in-flight request gauge by `delta`
pub fn add_http_requests_in_flight(delta: f64) {
    if delta >= 0.0 {
        gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(delta);
    } else {
        gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(-delta);
    }
}

// ============================================================================
// Store Metrics
// ============================================================================

/// Record one read of the record store
pub fn record_store_load(outcome: &str, record_count: usize) {
    counter!(
        names::STORE_LOADS_TOTAL,
        labels::OUTCOME => outcome.to_string()
    )
    .increment(1);

    if outcome == "ok" {
        gauge!(names::RECORDS_LOADED).set(record_count as f64);
    }
}

// ============================================================================
// Region Metrics
// ============================================================================

/// Record how many regions a request asked for and how many had records
pub fn record_region_lookup(requested: usize, resolved: usize) {
    counter!(names::REGIONS_REQUESTED_TOTAL).increment(requested as u64);
    counter!(names::REGIONS_RESOLVED_TOTAL).increment(resolved as u64);
}
