//! Where a task page gets its records from.

use crate::error::DatasetError;
use crate::record::DataRecord;

/// A provider of a task's records, injected into the page binder.
pub trait DatasetSource {
    fn load(&self) -> Result<Vec<DataRecord>, DatasetError>;
}

/// Records held as a JSON array string (embedded at build time or fetched).
#[derive(Debug, Clone)]
pub struct JsonDataset {
    json: String,
}

impl JsonDataset {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl DatasetSource for JsonDataset {
    fn load(&self) -> Result<Vec<DataRecord>, DatasetError> {
        parse_dataset(&self.json)
    }
}

/// Parse a JSON array of records. An empty array is rejected.
pub fn parse_dataset(json: &str) -> Result<Vec<DataRecord>, DatasetError> {
    let records: Vec<DataRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    log::info!("dataset: loaded {} records", records.len());
    Ok(records)
}
