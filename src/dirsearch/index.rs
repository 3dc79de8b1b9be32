//! # Result Sets and Display Indexes
//!
//! A [`ResultSet`] is the ordered sequence of records currently on screen. It
//! only ever holds [`RecordId`]s, so it is always a subsequence of the store,
//! in store order, and never owns or copies a record.
//!
//! Users don't see record ids. The grid numbers its cards `1, 2, 3, ...`,
//! and that is what a user types to ask for details (`:view 2`). A
//! [`DisplayIndex`] is that number. It only means something relative to the
//! result set it was shown with, so [`ResultSet::resolve`] is the one place
//! it turns back into a `RecordId`.

use crate::error::DirError;
use crate::model::{PersonRecord, RecordId};
use crate::store::RecordStore;
use std::str::FromStr;

/// A 1-based position in the displayed result grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = DirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        match digits.parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(DirError::InvalidIndex(s.to_string())),
        }
    }
}

/// The records currently shown, as ids into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    ids: Vec<RecordId>,
}

impl ResultSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every record in the store, in store order.
    pub fn all(store: &RecordStore) -> Self {
        Self {
            ids: store.iter().map(|(id, _)| id).collect(),
        }
    }

    pub(crate) fn from_ids(ids: Vec<RecordId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn resolve(&self, index: DisplayIndex) -> Option<RecordId> {
        index
            .0
            .checked_sub(1)
            .and_then(|i| self.ids.get(i))
            .copied()
    }

    /// Borrowed records, in display order.
    pub fn records<'s>(&'s self, store: &'s RecordStore) -> impl Iterator<Item = &'s PersonRecord> {
        self.ids.iter().filter_map(move |id| store.get(*id))
    }
}

/// A record paired with the index it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: DisplayIndex,
    pub id: RecordId,
    pub record: PersonRecord,
}

/// Numbers a result set for display, starting at 1.
pub fn index_results(results: &ResultSet, store: &RecordStore) -> Vec<DisplayRecord> {
    results
        .ids
        .iter()
        .filter_map(|id| store.get(*id).map(|record| (*id, record)))
        .enumerate()
        .map(|(i, (id, record))| DisplayRecord {
            index: DisplayIndex(i + 1),
            id,
            record: record.clone(),
        })
        .collect()
}
