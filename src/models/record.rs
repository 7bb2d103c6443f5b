use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One observation for a region, decoded from a [`StoredRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub region: String,
    pub latency_ms: f64,
    pub uptime_percent: f64,
}

impl Record {
    #[cfg(test)]
    pub fn new(region: &str, latency_ms: f64, uptime_percent: f64) -> Self {
        Self {
            region: region.to_string(),
            latency_ms,
            uptime_percent,
        }
    }
}

/// Entry as read from the record file.
///
/// Only `region` is inspected up front; the numeric fields are decoded when
/// the entry is selected for a requested region, so a broken entry elsewhere
/// in the file does not affect unrelated requests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StoredRecord(Value);

impl StoredRecord {
    /// Region name, or `None` when absent or not a string
    pub fn region(&self) -> Option<&str> {
        self.0.get("region").and_then(Value::as_str)
    }

    pub fn decode(&self) -> Result<Record, serde_json::Error> {
        Record::deserialize(&self.0)
    }
}

#[cfg(test)]
impl From<Value> for StoredRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
impl From<Record> for StoredRecord {
    fn from(record: Record) -> Self {
        Self(serde_json::json!({
            "region": record.region,
            "latency_ms": record.latency_ms,
            "uptime_percent": record.uptime_percent,
        }))
    }
}
