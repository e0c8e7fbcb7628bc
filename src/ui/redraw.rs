//! Row accounting for redrawn output
//!
//! A frame that wraps occupies more terminal rows than it has lines. Erasing
//! it precisely needs the row count at the current width.

use std::sync::OnceLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

fn sgr() -> &'static Regex {
    static SGR: OnceLock<Regex> = OnceLock::new();
    SGR.get_or_init(|| Regex::new("\x1b\\[[0-9;]*m").expect("static pattern"))
}

/// `text` without SGR color/style sequences
pub fn strip_sgr(text: &str) -> std::borrow::Cow<'_, str> {
    sgr().replace_all(text, "")
}

/// Terminal rows `printed` occupies at `width` columns
///
/// A trailing newline does not start a new row. A line of exactly
/// `k * width` columns takes `k` rows.
pub fn count_rows(printed: &str, width: u16) -> usize {
    if printed.is_empty() {
        return 0;
    }
    let plain = strip_sgr(printed);
    let body = plain.strip_suffix('\n').unwrap_or(&plain);
    let width = usize::from(width.max(1));

    body.split('\n')
        .map(|line| rows_for(line.trim_end_matches('\r').width(), width))
        .sum()
}

fn rows_for(visible: usize, width: usize) -> usize {
    let mut rows = 1;
    while visible > width * rows {
        rows += 1;
    }
    rows
}
