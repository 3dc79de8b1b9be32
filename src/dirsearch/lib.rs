//! # Dirsearch Architecture
//!
//! Dirsearch finds one person in a small, fixed directory: type part of a name,
//! watch the matching cards, open one to see its details. The library holds all
//! of that logic and knows nothing about terminals; the `dirsearch` binary is
//! just one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, the interactive loop, templated rendering  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One session: store + query controller + detail overlay   │
//! │  - User events in, screen snapshots (CmdResult) out         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (search.rs, controller.rs, overlay.rs, index.rs)      │
//! │  - Pure, synchronous state transitions                      │
//! │  - Cannot fail                                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (store/)                                           │
//! │  - RecordSource trait: bundled sample, JSON file, in-memory │
//! │  - Produce the immutable RecordStore once per session       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Query Policies
//!
//! The directory can be searched live (every keystroke filters, a blank box
//! shows nothing) or on submit (typing is buffered until Enter, a blank submit
//! shows everything). Both are kept as separate controllers; see [`controller`].
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade and its event/snapshot types
//! - [`controller`]: Live and submit query policies
//! - [`search`]: Full-name substring matching
//! - [`overlay`]: The single-slot detail overlay
//! - [`index`]: Result sets and the 1-based indexes users type
//! - [`store`]: The record store and its sources
//! - [`model`]: `PersonRecord` and `RecordId`
//! - [`config`]: Persisted configuration
//! - [`init`]: Wiring config, sources and overrides into a session
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod overlay;
pub mod search;
pub mod store;
