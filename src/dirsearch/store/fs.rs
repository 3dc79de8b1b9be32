use super::{RecordSource, RecordStore};
use crate::error::{DirError, Result};
use crate::model::PersonRecord;
use std::fs;
use std::path::PathBuf;

/// Reads the directory from a JSON array on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<RecordStore> {
        let content = fs::read_to_string(&self.path).map_err(|source| DirError::DataFile {
            path: self.path.clone(),
            source,
        })?;
        let store = parse_records(&content)?;
        log::debug!("loaded {} records from {}", store.len(), self.describe());
        Ok(store)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses a JSON array of person objects into a store, keeping array order.
pub fn parse_records(json: &str) -> Result<RecordStore> {
    let records: Vec<PersonRecord> = serde_json::from_str(json).map_err(DirError::Serialization)?;
    Ok(RecordStore::new(records))
}
