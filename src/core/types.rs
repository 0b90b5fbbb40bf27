//! Core data types for the site search engine.
//!
//! This module defines the wire shape of the search payload, the
//! in-memory `Document` the engine matches against, and the
//! `SearchResult` handed back to rendering code.

use serde::{Deserialize, Serialize};

/// One searchable article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Link to the article, e.g. `/posts/hello-world`
    pub url: String,

    /// Human-readable title
    pub title: String,

    /// Short summary (empty when the article has none)
    #[serde(default)]
    pub description: String,

    /// Full body text (empty when absent)
    #[serde(default)]
    pub content: String,
}

impl Document {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: String::new(),
            content: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// Metadata block of a wire record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMeta {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One element of the search payload array as served by the site
///
/// `excerpt` is carried by the payload but never used as a match or
/// excerpt source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub url: String,

    pub meta: RecordMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<SearchRecord> for Document {
    fn from(record: SearchRecord) -> Self {
        Self {
            url: record.url,
            title: record.meta.title,
            description: record.meta.description.unwrap_or_default(),
            content: record.content.unwrap_or_default(),
        }
    }
}

/// Title/description pair of a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMeta {
    /// Title, with highlight markup when the title itself matched
    pub title: String,

    /// Original description, untouched
    pub description: String,
}

/// Search result returned by a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,

    pub meta: ResultMeta,

    /// Length-bounded context with highlight markup
    pub excerpt: String,
}
