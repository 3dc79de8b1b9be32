//! The `dirsearch` command-line client.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and one-shot handlers
//! - `repl`: the interactive session
//! - `render`, `templates`, `styles`: terminal output

mod commands;
mod render;
mod repl;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
