//! Literal, case-insensitive query matching with snippet extraction.
//!
//! Queries are never interpreted as patterns: the query text is
//! escaped before it is compiled, so `a.b` only ever matches the three
//! characters `a`, `.`, `b`. All offsets produced here count Unicode
//! scalar values (characters), not bytes.

use regex::{Captures, Regex, RegexBuilder};

use crate::core::error::{DocsiftError, Result};
use crate::core::types::HitPosition;

/// Snippet window used when none is configured
pub const DEFAULT_SNIPPET_WINDOW: usize = 40;

/// How snippets are cut and marked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Characters kept on each side of the first occurrence
    pub window: usize,

    /// Inserted before every highlighted occurrence
    pub highlight_open: String,

    /// Inserted after every highlighted occurrence
    pub highlight_close: String,

    /// Marks a side of the snippet that was cut
    pub ellipsis: String,
}

impl SnippetOptions {
    /// Default markers with a custom window
    pub fn with_window(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_SNIPPET_WINDOW,
            highlight_open: "[".to_string(),
            highlight_close: "]".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

/// Compiled matcher for a single search query
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    regex: Regex,
}

impl QueryMatcher {
    /// Compile a matcher for `query`.
    ///
    /// # Errors
    ///
    /// - `InvalidQuery`: the query is empty or too large to compile
    pub fn new(query: &str) -> Result<Self> {
        if query.is_empty() {
            return Err(DocsiftError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| DocsiftError::InvalidQuery(format!("Failed to compile query: {e}")))?;

        Ok(Self { regex })
    }

    /// All non-overlapping occurrences in `text`, earliest first.
    pub fn find_hits(&self, text: &str) -> Vec<HitPosition> {
        let mut hits = Vec::new();
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        for m in self.regex.find_iter(text) {
            let start = char_cursor + text[byte_cursor..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            hits.push(HitPosition { start, end });

            byte_cursor = m.end();
            char_cursor = end;
        }

        hits
    }

    /// Wrap every occurrence in `text` with the highlight markers.
    pub fn highlight(&self, text: &str, options: &SnippetOptions) -> String {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| {
                format!(
                    "{}{}{}",
                    options.highlight_open, &caps[0], options.highlight_close
                )
            })
            .into_owned()
    }

    /// Build the highlighted excerpt around `hit`.
    ///
    /// The excerpt spans `window` characters on each side of the hit,
    /// clamped to the content; a clamped-away side is marked with the
    /// ellipsis. Highlighting runs over the whole snippet, ellipses
    /// included, so a query like `.` also marks the ellipsis dots.
    pub fn snippet(&self, content: &str, hit: HitPosition, options: &SnippetOptions) -> String {
        let total = content.chars().count();
        let left = hit.start.saturating_sub(options.window);
        let right = hit.end.saturating_add(options.window).min(total);

        let excerpt = &content[byte_offset(content, left)..byte_offset(content, right)];

        let prefix = if left > 0 { options.ellipsis.as_str() } else { "" };
        let suffix = if right < total {
            options.ellipsis.as_str()
        } else {
            ""
        };

        self.highlight(&format!("{prefix}{excerpt}{suffix}"), options)
    }
}

/// Byte offset of the character at `char_index`, or the text length
/// when the index is past the end.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
