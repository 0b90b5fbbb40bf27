//! Keyword search over the cached index.
//!
//! Matching is literal substring containment across title,
//! description, and body. Results come back in index order with a
//! highlighted title and a bounded, highlighted excerpt.

mod engine;
mod excerpt;
mod highlight;

pub use engine::{run_query, SearchOptions, SearchService};
pub use excerpt::{build_excerpt, context_window, select_source, ExcerptOptions};
pub use highlight::{render, truncate_chars, HighlightStyle, KeywordMatcher, ELLIPSIS};
