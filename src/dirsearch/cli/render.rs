//! # Rendering Module
//!
//! Turns API snapshots into terminal text through the `outstanding` templates.
//!
//! Column layout (widths, truncation, padding) is computed here because it has
//! to be Unicode-aware; the templates only arrange pre-measured strings and pick
//! styles. A [`Screen`] carries the color decision so the interactive loop and
//! the tests can force plain output.

use super::styles::{names, DIRSEARCH_THEME};
use super::templates::{DETAIL_TEMPLATE, MESSAGES_TEMPLATE, RESULTS_TEMPLATE, TEXT_LIST_TEMPLATE};
use dirsearch::api::{CmdMessage, CmdResult, MessageLevel};
use dirsearch::controller::Policy;
use dirsearch::index::DisplayRecord;
use dirsearch::overlay::DetailView;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_WIDTH: usize = 28;
pub const ADDRESS_WIDTH: usize = 36;
pub const RULE_WIDTH: usize = 40;

pub const NO_RESULTS: &str = "No results found!";
pub const START_TYPING: &str = "Start typing to search.";
const CLOSE_HINT: &str = "(:close to dismiss)";

#[derive(Serialize)]
struct RowData {
    index: String,
    name: String,
    name_pad: String,
    address: String,
    address_pad: String,
    phone: String,
}

#[derive(Serialize)]
struct ResultsData {
    summary: String,
    records: Vec<RowData>,
    empty_message: String,
}

#[derive(Serialize)]
struct DetailData {
    rule: String,
    name: String,
    address: String,
    phone: String,
    profile_image: String,
    hint: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

/// What to say when the grid is empty.
///
/// A live session with a blank box hasn't searched yet, so it gets a hint
/// instead of "no results".
pub fn empty_message(policy: Policy, query_text: &str) -> &'static str {
    if policy == Policy::Live && query_text.trim().is_empty() {
        START_TYPING
    } else {
        NO_RESULTS
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Screen {
    use_color: Option<bool>,
}

impl Screen {
    /// Colors if stdout supports them.
    pub fn auto() -> Self {
        Self { use_color: None }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            use_color: Some(false),
        }
    }

    fn render_or<T: Serialize>(
        &self,
        template: &str,
        data: &T,
        fallback: impl FnOnce(String) -> String,
    ) -> String {
        let theme = ThemeChoice::from(&*DIRSEARCH_THEME);
        let rendered = match self.use_color {
            Some(c) => render_with_color(template, data, theme, c),
            None => render(template, data, theme),
        };
        rendered.unwrap_or_else(|e| fallback(e.to_string()))
    }

    pub fn results(&self, listed: &[DisplayRecord], empty_message: &str) -> String {
        let index_width = listed.len().to_string().len();
        let name_width = column_width(listed.iter().map(|d| d.record.full_name()), NAME_WIDTH);
        let address_width =
            column_width(listed.iter().map(|d| d.record.address.clone()), ADDRESS_WIDTH);

        let records = listed
            .iter()
            .map(|d| {
                let name = truncate_to_width(&d.record.full_name(), name_width);
                let address = truncate_to_width(&d.record.address, address_width);
                RowData {
                    index: format!("{:>width$}.", d.index.0, width = index_width),
                    name_pad: pad_to(&name, name_width),
                    name,
                    address_pad: pad_to(&address, address_width),
                    address,
                    phone: d.record.phone.clone(),
                }
            })
            .collect();

        let summary = match listed.len() {
            0 => String::new(),
            1 => "1 person".to_string(),
            n => format!("{} people", n),
        };

        let data = ResultsData {
            summary,
            records,
            empty_message: empty_message.to_string(),
        };
        self.render_or(RESULTS_TEMPLATE, &data, |e| format!("Render error: {}\n", e))
    }

    pub fn detail(&self, view: &DetailView, show_hint: bool) -> String {
        let data = DetailData {
            rule: "─".repeat(RULE_WIDTH),
            name: view.full_name.clone(),
            address: view.address.clone(),
            phone: view.phone.clone(),
            profile_image: view.profile_image.to_string(),
            hint: if show_hint {
                CLOSE_HINT.to_string()
            } else {
                String::new()
            },
        };
        self.render_or(DETAIL_TEMPLATE, &data, |e| format!("Render error: {}\n", e))
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: message_style(msg.level).to_string(),
                })
                .collect(),
        };
        self.render_or(MESSAGES_TEMPLATE, &data, |_| {
            messages
                .iter()
                .map(|m| format!("{}\n", m.content))
                .collect()
        })
    }

    pub fn text_list(&self, lines: &[String], empty_message: &str) -> String {
        let data = TextListData {
            lines: lines.to_vec(),
            empty_message: empty_message.to_string(),
        };
        self.render_or(TEXT_LIST_TEMPLATE, &data, |_| format!("{}\n", empty_message))
    }

    /// A full redraw: the grid, then the overlay if open, then messages.
    pub fn frame(&self, result: &CmdResult, policy: Policy, interactive: bool) -> String {
        let mut out = self.results(&result.listed, empty_message(policy, &result.query_text));
        if let Some(view) = &result.detail {
            out.push('\n');
            out.push_str(&self.detail(view, interactive));
        }
        out.push_str(&self.messages(&result.messages));
        ensure_newline(out)
    }
}

fn message_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn column_width(values: impl Iterator<Item = String>, max: usize) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0).min(max)
}

fn pad_to(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(s.width()))
}

fn ensure_newline(mut s: String) -> String {
    if !s.is_empty() && !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

/// Cuts `s` to at most `max_width` columns, marking the cut with an ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
