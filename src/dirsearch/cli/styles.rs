//! Styles for the dirsearch CLI.
//!
//! Templates only refer to semantic names (`name`, `address`, `label`, ...);
//! the concrete colors live here, in one theme registered once.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const INDEX: &str = "index";
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone";
    pub const SUMMARY: &str = "summary";
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static DIRSEARCH_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((138, 138, 138)));
    let faint = Style::new().color256(rgb_to_ansi256((98, 98, 98)));
    let accent = Style::new().color256(rgb_to_ansi256((59, 130, 246)));

    Theme::new()
        .add(names::INDEX, accent.clone())
        .add(names::NAME, Style::new().bold())
        .add(names::ADDRESS, muted.clone())
        .add(names::PHONE, Style::new())
        .add(names::SUMMARY, muted.clone().italic())
        .add(names::HEADING, accent.bold())
        .add(names::LABEL, Style::new().bold())
        .add(names::PLACEHOLDER, muted.clone().italic())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::INFO, muted)
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red().bold())
});
