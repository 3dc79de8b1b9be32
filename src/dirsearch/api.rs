//! # API Facade
//!
//! [`DirectoryApi`] is the single entry point a UI talks to. It owns one
//! session's state (the store, the query controller and the detail overlay)
//! and exposes each user action as a method.
//!
//! ## Events In, Snapshots Out
//!
//! Every inbound action is a synchronous state transition:
//!
//! - [`Event::TextChanged`]: the search box changed
//! - [`Event::Commit`]: the submit key was pressed
//! - [`Event::ViewDetails`]: "view details" on a result card
//! - [`Event::Close`]: the overlay's close button
//!
//! Each transition runs to completion and returns a [`CmdResult`], a full
//! snapshot of what should now be on screen. The UI re-renders from it after
//! every call; there is no partial update and nothing runs in the background.
//!
//! ## What the API Does NOT Do
//!
//! - **Matching rules**: those live in `search.rs`
//! - **Timing of searches**: that is the controller's policy (`controller.rs`)
//! - **I/O**: no stdout, no files; sources are loaded before the API exists
//!
//! The only fallible call is [`DirectoryApi::view_details`], because it turns
//! a user-typed display index into a record reference.

use crate::controller::{Policy, QueryController};
use crate::error::{DirError, Result};
use crate::index::{index_results, DisplayIndex, DisplayRecord, ResultSet};
use crate::overlay::{DetailOverlay, DetailView};
use crate::store::RecordStore;

/// An inbound user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TextChanged(String),
    Commit,
    ViewDetails(DisplayIndex),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What the screen should show after a transition.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub query_text: String,
    pub listed: Vec<DisplayRecord>,
    pub detail: Option<DetailView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// One browsing session over a fixed directory.
pub struct DirectoryApi {
    store: RecordStore,
    controller: Box<dyn QueryController>,
    overlay: DetailOverlay,
}

impl DirectoryApi {
    pub fn new(store: RecordStore, policy: Policy) -> Self {
        log::debug!(
            "starting {} session over {} records",
            policy,
            store.len()
        );
        let controller = policy.controller(store.clone());
        Self {
            store,
            controller,
            overlay: DetailOverlay::Closed,
        }
    }

    pub fn policy(&self) -> Policy {
        self.controller.policy()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query_text(&self) -> &str {
        self.controller.query_text()
    }

    pub fn results(&self) -> &ResultSet {
        self.controller.results()
    }

    pub fn overlay(&self) -> DetailOverlay {
        self.overlay
    }

    pub fn text_changed(&mut self, text: &str) -> CmdResult {
        self.controller.on_text_change(text);
        self.snapshot()
    }

    pub fn commit(&mut self) -> CmdResult {
        self.controller.on_commit();
        self.snapshot()
    }

    /// Opens the overlay on the `index`-th card of the current results.
    ///
    /// An index past the end of the results is an error and leaves the
    /// overlay as it was.
    pub fn view_details(&mut self, index: DisplayIndex) -> Result<CmdResult> {
        let results = self.controller.results();
        let id = results
            .resolve(index)
            .ok_or(DirError::IndexOutOfRange {
                index,
                available: results.len(),
            })?;
        self.overlay.request_open(id);
        Ok(self.snapshot())
    }

    pub fn close_details(&mut self) -> CmdResult {
        self.overlay.request_close();
        self.snapshot()
    }

    pub fn dispatch(&mut self, event: Event) -> Result<CmdResult> {
        match event {
            Event::TextChanged(text) => Ok(self.text_changed(&text)),
            Event::Commit => Ok(self.commit()),
            Event::ViewDetails(index) => self.view_details(index),
            Event::Close => Ok(self.close_details()),
        }
    }

    /// The current screen, without changing anything.
    pub fn snapshot(&self) -> CmdResult {
        CmdResult {
            query_text: self.controller.query_text().to_string(),
            listed: index_results(self.controller.results(), &self.store),
            detail: self.overlay.view(&self.store),
            messages: Vec::new(),
        }
    }
}
