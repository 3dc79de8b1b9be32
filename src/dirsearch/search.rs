//! Full-name search over a [`RecordStore`].
//!
//! Matching is a case-insensitive, unanchored substring test of the trimmed,
//! lowercased query against `"{first_name} {last_name}"`, also lowercased.
//! Address and phone are never searched. The output is a stable filter of the
//! store: no ranking, no reordering, duplicates kept.
//!
//! An empty query is a substring of every name, so `filter("", store)` returns
//! the whole store. Callers that want a blank box to show nothing have to
//! decide that themselves (see [`crate::controller::LiveFilter`]).

use crate::index::ResultSet;
use crate::model::PersonRecord;
use crate::store::RecordStore;

/// Trims surrounding whitespace and lowercases.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// The lowercased full name a record is matched against.
pub fn full_name_key(record: &PersonRecord) -> String {
    record.full_name().to_lowercase()
}

/// Whether `record` matches an already normalized query.
pub fn matches(record: &PersonRecord, normalized_query: &str) -> bool {
    full_name_key(record).contains(normalized_query)
}

pub fn filter(query: &str, store: &RecordStore) -> ResultSet {
    let needle = normalize_query(query);
    let ids = store
        .iter()
        .filter(|(_, record)| matches(record, &needle))
        .map(|(id, _)| id)
        .collect();
    ResultSet::from_ids(ids)
}
