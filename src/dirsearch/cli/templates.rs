//! Output templates, kept as stand-alone files and embedded at compile time.
//!
//! Templates are minijinja and style text through the `style` filter using the
//! names in [`super::styles::names`]. Every line a template emits ends with an
//! explicit newline; `{%- -%}` markers on block tags keep the tags themselves
//! from adding blank lines.

pub const RESULTS_TEMPLATE: &str = include_str!("templates/results.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
