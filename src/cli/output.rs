//! Output formatting for CLI commands
//!
//! Supports colored output (respects NO_COLOR env var).

use crate::core::types::HitPosition;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document ids
    pub fn doc_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for highlighted matches
    pub fn highlight(s: &str) -> ColoredString {
        s.red().bold()
    }
}

/// Color the `hits` spans of a plain snippet
///
/// Spans are character offsets into `text`, as produced by
/// `QueryMatcher::find_hits`. Working from offsets rather than marker
/// characters keeps literal brackets in the text uncolored.
pub fn render_snippet(text: &str, hits: &[HitPosition]) -> String {
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    let byte_at = |char_index: usize| offsets[char_index.min(offsets.len() - 1)];

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for hit in hits {
        out.push_str(&text[byte_at(cursor)..byte_at(hit.start)]);
        out.push_str(&colors::highlight(&text[byte_at(hit.start)..byte_at(hit.end)]).to_string());
        cursor = hit.end;
    }

    out.push_str(&text[byte_at(cursor)..]);
    out
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}
