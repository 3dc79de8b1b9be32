use super::fs::parse_records;
use super::{RecordSource, RecordStore};
use crate::error::Result;

const BUNDLED_USERS: &str = include_str!("../data/users.json");

/// The sample directory shipped inside the binary.
///
/// Used whenever no data file is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl RecordSource for BundledSource {
    fn load(&self) -> Result<RecordStore> {
        let store = parse_records(BUNDLED_USERS)?;
        log::debug!("loaded {} bundled records", store.len());
        Ok(store)
    }

    fn describe(&self) -> String {
        "bundled sample directory".to_string()
    }
}
