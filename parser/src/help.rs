//! Column-aligned option descriptions.
//!
//! Options with a short character come first, ordered by that character,
//! followed by long-only options ordered by name. Each option line reads
//!
//! ```text
//! -h  --help     Show this help
//!     --verbose  Log every dispatched option
//!                (continuation lines align here)
//! ```
//!
//! where the long-name column is as wide as the longest long name.

use std::cmp::Ordering;

use ansi_term::{Colour, Style};
use cmdopts_core::{OptionRegistry, OptionSpec};
use serde::{Deserialize, Serialize};

/// Width of the short marker column (`-X`).
const SHORT_WIDTH: usize = 2;
/// Spaces between columns.
const GUTTER: &str = "  ";
const LONG_PREFIX: &str = "--";

/// Layout settings for [`format_description`].
///
/// # Examples
///
/// ```
/// use cmdopts::HelpLayout;
///
/// let layout: HelpLayout = serde_json::from_str(r#"{"wrap_width": 60}"#).unwrap();
/// assert_eq!(layout.header, "Options:");
/// assert_eq!(layout.wrap_width, Some(60));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpLayout {
    /// First output line.
    pub header: String,
    /// Total line width to word-wrap descriptions at; `None` disables
    /// wrapping.
    pub wrap_width: Option<usize>,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self {
            header: "Options:".to_string(),
            wrap_width: None,
        }
    }
}

impl HelpLayout {
    pub fn with_header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }
}

/// Renders the header, a blank line and one or more lines per option.
///
/// With `colorize`, the short and long markers are styled with ANSI escape
/// sequences; padding is kept outside the escapes so columns still line up.
/// Terminal and `NO_COLOR` detection is left to the caller.
pub fn format_description(
    registry: &OptionRegistry,
    layout: &HelpLayout,
    colorize: bool,
) -> Vec<String> {
    let mut specs: Vec<&OptionSpec> = registry.iter().collect();
    specs.sort_by(|a, b| display_order(a, b));

    let name_width = specs
        .iter()
        .map(|spec| spec.long_name().chars().count())
        .max()
        .unwrap_or(0);
    let indent = SHORT_WIDTH + GUTTER.len() + LONG_PREFIX.len() + name_width + GUTTER.len();
    let margin = " ".repeat(indent);
    let text_width = layout.wrap_width.map(|w| w.saturating_sub(indent).max(1));

    let mut lines = vec![layout.header.clone(), String::new()];
    for spec in specs {
        let mut description = spec
            .description()
            .iter()
            .flat_map(|line| wrap(line, text_width));

        let first = description.next().unwrap_or_default();
        let marker = option_marker(spec, name_width, colorize);
        lines.push(format!("{marker}{GUTTER}{first}").trim_end().to_string());

        for line in description {
            lines.push(format!("{margin}{line}").trim_end().to_string());
        }
    }

    lines
}

fn display_order(a: &OptionSpec, b: &OptionSpec) -> Ordering {
    match (a.short_char(), b.short_char()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.long_name().cmp(b.long_name()),
    }
}

/// `-X  --name` padded to the long-name column width.
fn option_marker(spec: &OptionSpec, name_width: usize, colorize: bool) -> String {
    let short = match spec.short_char() {
        Some(c) if colorize => short_style().paint(format!("-{c}")).to_string(),
        Some(c) => format!("-{c}"),
        None => " ".repeat(SHORT_WIDTH),
    };
    let long = format!("{LONG_PREFIX}{}", spec.long_name());
    let padding = " ".repeat(name_width - spec.long_name().chars().count());
    let long = if colorize {
        long_style().paint(long).to_string()
    } else {
        long
    };

    format!("{short}{GUTTER}{long}{padding}")
}

fn short_style() -> Style {
    Style::new().bold().fg(Colour::Green)
}

fn long_style() -> Style {
    Style::new().bold().fg(Colour::Cyan)
}

/// Word-wraps one description line to `width` columns. Lines that already
/// fit are returned untouched; words longer than `width` stay whole. Spacing
/// between words on the same output line is kept, and a whitespace-only line
/// becomes one blank line.
fn wrap(line: &str, width: Option<usize>) -> Vec<String> {
    let Some(width) = width else {
        return vec![line.to_string()];
    };
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut rest = line;
    loop {
        let word_start = rest.len() - rest.trim_start().len();
        let (gap, tail) = rest.split_at(word_start);
        let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, tail) = tail.split_at(word_end);
        if word.is_empty() {
            break;
        }
        rest = tail;

        let word_len = word.chars().count();
        let gap_len = gap.chars().count();
        if current.is_empty() {
            // leading indentation survives on the first output line only
            if wrapped.is_empty() {
                current.push_str(gap);
                current_len += gap_len;
            }
        } else if current_len + gap_len + word_len > width {
            wrapped.push(std::mem::take(&mut current));
            current_len = 0;
        } else {
            current.push_str(gap);
            current_len += gap_len;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }

    wrapped
}
