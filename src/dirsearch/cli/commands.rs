//! # CLI Layer
//!
//! This module is **one possible UI client** for dirsearch. The interactive
//! loop and the one-shot commands drive the same [`DirectoryApi`] session
//! type; none of them decides what matches or when a search runs.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Sets up logging
//! - Handles argument parsing
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds the session from config, flags and the data file
//! - `handle_*()`: Per-command handlers that call the API and print its snapshot
//!
//! One-shot commands replay the same events the interactive session would
//! send: `search ana` is "type ana, press Enter".

use super::render::Screen;
use super::repl::run_repl;
use super::setup::{Cli, Commands};
use clap::Parser;
use dirsearch::api::DirectoryApi;
use dirsearch::config::{self, ConfigAction};
use dirsearch::error::Result;
use dirsearch::index::{index_results, DisplayIndex, ResultSet};
use dirsearch::init::{initialize, Overrides};
use env_logger::Env;
use std::path::Path;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config_dir = config::config_dir()?;
    let screen = Screen::auto();

    // Config doesn't need records
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(&config_dir, key, value, &screen);
    }

    let overrides = Overrides {
        data_file: cli.data.clone(),
        policy: cli.policy,
    };
    let mut api = init_context(&config_dir, overrides)?;

    match cli.command {
        Some(Commands::Search { no_commit, query }) => {
            handle_search(&mut api, &query.join(" "), no_commit, &screen)
        }
        Some(Commands::List) => handle_list(&api, &screen),
        Some(Commands::Show { index, query }) => {
            handle_show(&mut api, &index, &query.join(" "), &screen)
        }
        Some(Commands::Interactive) | None => handle_interactive(&mut api, &screen),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_context(config_dir: &Path, overrides: Overrides) -> Result<DirectoryApi> {
    let ctx = initialize(config_dir, overrides)?;
    log::info!("loaded {} records from {}", ctx.api.store().len(), ctx.source);
    Ok(ctx.api)
}

fn handle_search(api: &mut DirectoryApi, query: &str, no_commit: bool, screen: &Screen) -> Result<()> {
    let mut result = api.text_changed(query);
    if !no_commit {
        result = api.commit();
    }
    print!("{}", screen.frame(&result, api.policy(), false));
    Ok(())
}

fn handle_list(api: &DirectoryApi, screen: &Screen) -> Result<()> {
    let everyone = index_results(&ResultSet::all(api.store()), api.store());
    print!("{}", screen.results(&everyone, "The directory is empty."));
    Ok(())
}

fn handle_show(api: &mut DirectoryApi, index: &str, query: &str, screen: &Screen) -> Result<()> {
    let index: DisplayIndex = index.parse()?;
    api.text_changed(query);
    api.commit();

    // A successful view always opens the overlay
    if let Some(view) = api.view_details(index)?.detail {
        print!("{}", screen.detail(&view, false));
    }
    Ok(())
}

fn handle_interactive(api: &mut DirectoryApi, screen: &Screen) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_repl(api, stdin.lock(), &mut stdout, screen)
}

fn handle_config(
    config_dir: &Path,
    key: Option<String>,
    value: Option<String>,
    screen: &Screen,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let outcome = config::run(config_dir, action)?;
    if show_all {
        let lines: Vec<String> = outcome
            .config
            .list_all()
            .into_iter()
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", screen.text_list(&lines, "No configuration values."));
    }
    print!("{}", screen.messages(&outcome.messages));
    Ok(())
}
