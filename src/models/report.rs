#![allow(dead_code)]
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Aggregate statistics for one region
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

/// Region -> metrics mapping, serialized as a JSON object in the order
/// regions were first resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    entries: Vec<(String, RegionMetrics)>,
}

impl MetricsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `region`, keeping its original position.
    pub fn insert(&mut self, region: &str, metrics: RegionMetrics) {
        match self.entries.iter_mut().find(|(name, _)| name == region) {
            Some((_, existing)) => *existing = metrics,
            None => self.entries.push((region.to_string(), metrics)),
        }
    }

    pub fn get(&self, region: &str) -> Option<&RegionMetrics> {
        self.entries
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, metrics)| metrics)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for MetricsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, metrics) in &self.entries {
            map.serialize_entry(region, metrics)?;
        }
        map.end()
    }
}
