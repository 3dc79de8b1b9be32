//! # Query Controllers
//!
//! A controller owns the raw query text and decides **when** the search runs.
//! There are two policies, and they are deliberately kept apart because their
//! behaviour on an empty query is visibly different:
//!
//! | | [`LiveFilter`] (`live`) | [`SubmitOnEnter`] (`submit`) |
//! |---|---|---|
//! | text change | stores text, re-runs search | stores text only |
//! | commit (Enter) | no-op | re-runs search |
//! | blank query | empty result, search not run | whole store |
//! | before any input | empty result | whole store |
//!
//! Neither controller ever reorders: results always come from
//! [`search::filter`], which is a stable filter of the store.

use crate::error::{DirError, Result};
use crate::index::ResultSet;
use crate::search;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which query-triggering strategy a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Filter on every text change; a blank box shows nothing.
    #[default]
    Live,
    /// Filter only when the query is submitted; a blank submit shows everything.
    Submit,
}

impl Policy {
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::Live => "live",
            Policy::Submit => "submit",
        }
    }

    pub fn controller(self, store: RecordStore) -> Box<dyn QueryController> {
        match self {
            Policy::Live => Box::new(LiveFilter::new(store)),
            Policy::Submit => Box::new(SubmitOnEnter::new(store)),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = DirError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" | "a" => Ok(Policy::Live),
            "submit" | "b" => Ok(Policy::Submit),
            other => Err(DirError::Config(format!(
                "unknown policy '{}' (expected 'live' or 'submit')",
                other
            ))),
        }
    }
}

/// Owns the query text and the result set derived from it.
pub trait QueryController {
    fn policy(&self) -> Policy;

    /// The text exactly as last entered, untrimmed.
    fn query_text(&self) -> &str;

    fn results(&self) -> &ResultSet;

    fn on_text_change(&mut self, new_text: &str);

    /// The submit key. Policies that don't wait for a submit ignore it.
    fn on_commit(&mut self) {}
}

/// Policy A: every text change recomputes the results.
pub struct LiveFilter {
    store: RecordStore,
    query_text: String,
    results: ResultSet,
}

impl LiveFilter {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            query_text: String::new(),
            results: ResultSet::empty(),
        }
    }
}

impl QueryController for LiveFilter {
    fn policy(&self) -> Policy {
        Policy::Live
    }

    fn query_text(&self) -> &str {
        &self.query_text
    }

    fn results(&self) -> &ResultSet {
        &self.results
    }

    fn on_text_change(&mut self, new_text: &str) {
        self.query_text = new_text.to_string();
        // A cleared box shows nothing rather than the whole directory.
        self.results = if new_text.trim().is_empty() {
            ResultSet::empty()
        } else {
            search::filter(new_text, &self.store)
        };
        log::debug!(
            "live: query {:?} -> {} results",
            self.query_text,
            self.results.len()
        );
    }
}

/// Policy B: text changes are buffered until the query is submitted.
pub struct SubmitOnEnter {
    store: RecordStore,
    query_text: String,
    results: ResultSet,
}

impl SubmitOnEnter {
    pub fn new(store: RecordStore) -> Self {
        let results = ResultSet::all(&store);
        Self {
            store,
            query_text: String::new(),
            results,
        }
    }
}

impl QueryController for SubmitOnEnter {
    fn policy(&self) -> Policy {
        Policy::Submit
    }

    fn query_text(&self) -> &str {
        &self.query_text
    }

    fn results(&self) -> &ResultSet {
        &self.results
    }

    fn on_text_change(&mut self, new_text: &str) {
        self.query_text = new_text.to_string();
    }

    fn on_commit(&mut self) {
        self.results = search::filter(&self.query_text, &self.store);
        log::debug!(
            "submit: query {:?} -> {} results",
            self.query_text,
            self.results.len()
        );
    }
}
