//! Region Metrics Service
//!
//! Turns a record set and a [`MetricsRequest`] into a [`MetricsReport`]:
//! - avg_latency / avg_uptime: arithmetic means over the region's records
//! - p95_latency: 95th percentile, linear interpolation
//! - breaches: records with latency strictly above the caller threshold
//!
//! Regions with no matching record are left out of the report. Entries
//! without a string `region` never match; a matched entry whose numeric
//! fields cannot be decoded fails the whole request.

pub mod stats;

use crate::models::{MetricsReport, MetricsRequest, RegionMetrics, StoredRecord};

/// Percentile reported as `p95_latency`
pub const LATENCY_PERCENTILE: f64 = 95.0;

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Invalid record for region '{region}': {source}")]
    InvalidRecord {
        region: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Compute metrics for one region, or `None` when no record matches.
///
/// Region names match exactly (case-sensitive).
pub fn region_metrics(
    records: &[StoredRecord],
    region: &str,
    threshold_ms: f64,
) -> Result<Option<RegionMetrics>, MetricsError> {
    let mut latencies = Vec::new();
    let mut uptimes = Vec::new();

    for stored in records.iter().filter(|r| r.region() == Some(region)) {
        let record = stored.decode().map_err(|source| MetricsError::InvalidRecord {
            region: region.to_string(),
            source,
        })?;
        latencies.push(record.latency_ms);
        uptimes.push(record.uptime_percent);
    }

    if latencies.is_empty() {
        return Ok(None);
    }

    Ok(Some(RegionMetrics {
        avg_latency: stats::mean(&latencies),
        p95_latency: stats::percentile(&latencies, LATENCY_PERCENTILE),
        avg_uptime: stats::mean(&uptimes),
        breaches: stats::count_breaches(&latencies, threshold_ms),
    }))
}

/// Build the report for every requested region, in request order.
pub fn compute_report(
    records: &[StoredRecord],
    request: &MetricsRequest,
) -> Result<MetricsReport, MetricsError> {
    let mut report = MetricsReport::new();
    for region in &request.regions {
        match region_metrics(records, region, request.threshold_ms)? {
            Some(metrics) => report.insert(region, metrics),
            None => tracing::debug!("No records for region {}, skipping", region),
        }
    }
    Ok(report)
}
