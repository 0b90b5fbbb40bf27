//! Literal keyword matching and highlight rendering.
//!
//! A field matches when its lowercased text contains the lowercased
//! keyword. Locating and highlighting occurrences uses a compiled
//! pattern: the keyword is passed through [`regex::escape`] before
//! compiling, so characters like `.`, `*` or `(` only ever match
//! themselves.
//!
//! All lengths here are counted in characters, never bytes, so
//! truncation cannot split a multi-byte sequence.

use crate::core::error::{Result, SearchError};
use crate::core::types::Document;
use regex::{Regex, RegexBuilder};

/// Appended to text cut at its length budget
pub const ELLIPSIS: &str = "...";

/// Markup wrapped around each highlighted occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    pub open: String,
    pub close: String,
}

impl HighlightStyle {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

/// Compiled form of a search keyword
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    pattern: Regex,
}

impl KeywordMatcher {
    /// Compile a keyword for literal case-insensitive matching
    ///
    /// The keyword is lowercased but not trimmed: surrounding
    /// whitespace is part of what gets matched.
    pub fn new(keyword: &str) -> Result<Self> {
        if keyword.is_empty() {
            return Err(SearchError::InvalidKeyword(
                "Keyword cannot be empty".to_string(),
            ));
        }

        let keyword = keyword.to_lowercase();
        let pattern = RegexBuilder::new(&regex::escape(&keyword))
            .case_insensitive(true)
            .build()
            .map_err(|e| SearchError::InvalidKeyword(e.to_string()))?;

        Ok(Self { keyword, pattern })
    }

    /// The lowercased keyword
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Whether the lowercased `text` contains the keyword
    pub fn is_match(&self, text: &str) -> bool {
        !text.is_empty() && text.to_lowercase().contains(&self.keyword)
    }

    /// Byte range of the first highlightable occurrence in `text`
    ///
    /// Case folding here is per character, so a rare text can match
    /// without a locatable span (`İ` lowercases to two characters).
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.pattern.find(text).map(|m| (m.start(), m.end()))
    }

    /// Whether any searchable field of `doc` contains the keyword
    pub fn matches_document(&self, doc: &Document) -> bool {
        self.is_match(&doc.title) || self.is_match(&doc.description) || self.is_match(&doc.content)
    }
}

/// Cut `text` to at most `max_chars` characters
///
/// Returns the kept prefix and whether anything was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

/// Truncate `text` to `max_length` characters, then wrap every
/// occurrence of the keyword in the highlight markup.
///
/// Truncation happens first: an occurrence straddling or past the
/// cut is not highlighted. The ellipsis is appended after
/// highlighting and is never itself highlighted.
pub fn render(
    text: &str,
    matcher: &KeywordMatcher,
    max_length: usize,
    style: &HighlightStyle,
) -> String {
    let (window, truncated) = truncate_chars(text, max_length);

    let mut out = String::with_capacity(window.len() + ELLIPSIS.len() + 32);
    let mut last = 0;
    for m in matcher.pattern.find_iter(window) {
        out.push_str(&window[last..m.start()]);
        out.push_str(&style.open);
        out.push_str(m.as_str());
        out.push_str(&style.close);
        last = m.end();
    }
    out.push_str(&window[last..]);

    if truncated {
        out.push_str(ELLIPSIS);
    }
    out
}
