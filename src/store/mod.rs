//! Record Store
//!
//! Source of the records the metrics handler aggregates. The handler only
//! depends on the [`RecordStore`] trait so tests and alternative deployments
//! can supply records without touching the filesystem.

pub mod json_file;

pub use json_file::JsonFileStore;

use crate::models::StoredRecord;
#[cfg(test)]
use crate::models::Record;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("data.json not found on the server")]
    NotFound,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoreError {
    /// Short label used for the `store_loads_total` outcome
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound => "not_found",
            StoreError::Io(_) => "io_error",
            StoreError::Malformed(_) => "malformed",
        }
    }
}

/// Read-only access to the full record collection.
///
/// Every call is a fresh read; implementations must not cache between calls.
pub trait RecordStore: Send + Sync {
    fn load(&self) -> Result<Vec<StoredRecord>, StoreError>;
}

/// Fixed in-memory record set
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    records: Vec<StoredRecord>,
}

#[cfg(test)]
impl StaticStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self::from_stored(records.into_iter().map(StoredRecord::from).collect())
    }

    pub fn from_stored(records: Vec<StoredRecord>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
impl RecordStore for StaticStore {
    fn load(&self) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
