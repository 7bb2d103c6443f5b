use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{RecordStore, StoreError};
use crate::metrics;
use crate::models::StoredRecord;

/// Record store backed by a JSON array on disk, re-read on every load
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<StoredRecord>, StoreError> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound,
            _ => StoreError::Io(e),
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<StoredRecord>, StoreError> {
        match self.read_records() {
            Ok(records) => {
                tracing::debug!("Loaded {} records from {}", records.len(), self.path.display());
                metrics::record_store_load("ok", records.len());
                Ok(records)
            }
            Err(e) => {
                tracing::error!("Failed to load records from {}: {}", self.path.display(), e);
                metrics::record_store_load(e.kind(), 0);
                Err(e)
            }
        }
    }
}
