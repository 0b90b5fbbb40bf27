//! Excerpt selection.
//!
//! Picks the text shown under a result, in order of preference:
//!
//! 1. the description, when it contains the keyword
//! 2. a window of the body around the first occurrence
//! 3. the description as-is, or the fallback text
//!
//! The chosen text is then truncated and highlighted by
//! [`render`](super::highlight::render).

use super::highlight::{render, HighlightStyle, KeywordMatcher};
use crate::core::types::Document;

/// Excerpt sizing and fallback
#[derive(Debug, Clone)]
pub struct ExcerptOptions {
    pub max_length: usize,
    pub context_chars: usize,
    pub fallback: String,
    pub style: HighlightStyle,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            max_length: 150,
            context_chars: 50,
            fallback: "No description available.".to_string(),
            style: HighlightStyle::default(),
        }
    }
}

/// Choose the unrendered excerpt text for `doc`
pub fn select_source<'a>(
    doc: &'a Document,
    matcher: &KeywordMatcher,
    context_chars: usize,
    fallback: &'a str,
) -> &'a str {
    if matcher.is_match(&doc.description) {
        return &doc.description;
    }

    if matcher.is_match(&doc.content) {
        if let Some((start, end)) = matcher.find(&doc.content) {
            return context_window(&doc.content, start, end, context_chars);
        }
    }

    if doc.description.is_empty() {
        fallback
    } else {
        &doc.description
    }
}

/// Build the highlighted excerpt for `doc`
pub fn build_excerpt(doc: &Document, matcher: &KeywordMatcher, options: &ExcerptOptions) -> String {
    let source = select_source(doc, matcher, options.context_chars, &options.fallback);
    render(source, matcher, options.max_length, &options.style)
}

/// Slice of `text` covering the byte range `start..end` plus up to
/// `context` characters on each side, clamped to the string bounds
pub fn context_window(text: &str, start: usize, end: usize, context: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(context)
        .last()
        .map_or(start, |(idx, _)| idx);

    let to = text[end..]
        .char_indices()
        .nth(context)
        .map_or(text.len(), |(idx, _)| end + idx);

    &text[from..to]
}
