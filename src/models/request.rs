use serde::Deserialize;

/// Message returned for any body that does not carry both required fields
pub const INVALID_REQUEST_BODY: &str =
    "Invalid request body. 'regions' and 'threshold_ms' are required.";

/// Body of `POST /metrics`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsRequest {
    /// Region identifiers, in caller order. Duplicates and unknown regions are allowed.
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

impl MetricsRequest {
    /// Parse a raw request body. An empty body, invalid JSON, or a document
    /// missing either field is rejected before any record is read.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
