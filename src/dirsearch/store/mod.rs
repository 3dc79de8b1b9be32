//! # Record Sources
//!
//! The directory is a fixed, ordered, read-only list of [`PersonRecord`]s. It is
//! loaded once when a session starts and never changes afterwards.
//!
//! ## RecordStore
//!
//! [`RecordStore`] is the loaded list. It is cheap to clone (the records sit
//! behind an `Arc`), so the controller, the overlay and the API can each hold
//! one without any locking. Insertion order is the order of the source file,
//! and every derived view keeps that order.
//!
//! ## Sources
//!
//! Loading is abstracted behind the [`RecordSource`] trait:
//!
//! - [`bundled::BundledSource`]: the sample dataset compiled into the binary
//! - [`fs::JsonFileSource`]: a JSON array on disk
//! - [`memory::InMemorySource`]: records handed over directly (tests, embedding)
//!
//! The JSON shape is an array of objects:
//!
//! ```text
//! [
//!   { "firstName": "Ana", "lastName": "Lee", "address": "...", "phone": "..." },
//!   ...
//! ]
//! ```
//!
//! Loading is the only fallible step. Once a `RecordStore` exists, nothing that
//! reads it can fail.

use crate::error::Result;
use crate::model::{PersonRecord, RecordId};
use std::sync::Arc;

pub mod bundled;
pub mod fs;
pub mod memory;

/// The fixed, ordered collection every search runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Arc<[PersonRecord]>,
}

impl RecordStore {
    pub fn new(records: Vec<PersonRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&PersonRecord> {
        self.records.get(id.0)
    }

    /// Records in store order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &PersonRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (RecordId(i), record))
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Something that can produce the session's [`RecordStore`].
pub trait RecordSource {
    /// Load every record, preserving source order.
    fn load(&self) -> Result<RecordStore>;

    /// Human-readable origin, used in logs and messages.
    fn describe(&self) -> String;
}
