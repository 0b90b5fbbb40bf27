//! Query execution over the cached index.
//!
//! This module provides the SearchService: filter the corpus by
//! keyword, keep index order, and decorate each hit with a
//! highlighted title and excerpt.

use super::excerpt::{build_excerpt, ExcerptOptions};
use super::highlight::{render, HighlightStyle, KeywordMatcher};
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::index::IndexCache;
use crate::core::types::{Document, ResultMeta, SearchResult};
use std::sync::Arc;
use std::time::Instant;

/// Rendering budget for results
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub title_max_length: usize,
    pub excerpt: ExcerptOptions,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            title_max_length: config.title_max_length,
            excerpt: ExcerptOptions {
                max_length: config.excerpt_max_length,
                context_chars: config.context_chars,
                fallback: config.fallback_excerpt.clone(),
                style: HighlightStyle::new(
                    config.highlight_open.clone(),
                    config.highlight_close.clone(),
                ),
            },
        }
    }
}

/// Keyword search service
pub struct SearchService {
    index: Arc<IndexCache>,
    options: SearchOptions,
}

impl SearchService {
    /// Create a new search service
    pub fn new(index: Arc<IndexCache>, options: SearchOptions) -> Self {
        Self { index, options }
    }

    /// Search the corpus, never failing
    ///
    /// A blank keyword returns nothing without touching the index. Any
    /// load failure is logged and yields an empty list.
    pub async fn search(&self, keyword: &str) -> Vec<SearchResult> {
        match self.try_search(keyword).await {
            Ok(results) => results,
            Err(e) => {
                tracing::debug!(error = %e, "Search returned no results");
                Vec::new()
            }
        }
    }

    /// Search the corpus, reporting why the index could not be loaded
    pub async fn try_search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }

        let matcher = KeywordMatcher::new(keyword)?;
        let documents = self.index.ensure_loaded().await?;

        let start = Instant::now();
        let results = run_query(&documents, &matcher, &self.options);

        tracing::debug!(
            keyword = matcher.keyword(),
            documents = documents.len(),
            matches = results.len(),
            duration_us = start.elapsed().as_micros() as u64,
            "Search complete"
        );

        Ok(results)
    }

    /// Forget the cached corpus
    pub fn clear_cache(&self) {
        self.index.clear();
    }

    pub fn index(&self) -> &Arc<IndexCache> {
        &self.index
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

/// Filter `documents` in order and build a result for each match
pub fn run_query(
    documents: &[Document],
    matcher: &KeywordMatcher,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    documents
        .iter()
        .filter(|doc| matcher.matches_document(doc))
        .map(|doc| build_result(doc, matcher, options))
        .collect()
}

fn build_result(doc: &Document, matcher: &KeywordMatcher, options: &SearchOptions) -> SearchResult {
    let title = if matcher.is_match(&doc.title) {
        render(
            &doc.title,
            matcher,
            options.title_max_length,
            &options.excerpt.style,
        )
    } else {
        doc.title.clone()
    };

    SearchResult {
        url: doc.url.clone(),
        meta: ResultMeta {
            title,
            description: doc.description.clone(),
        },
        excerpt: build_excerpt(doc, matcher, &options.excerpt),
    }
}
