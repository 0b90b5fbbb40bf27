//! Unified service container
//!
//! Provides shared access to the index cache and search service.

use crate::core::config::Config;
use crate::core::index::{source, CorpusSource, IndexCache};
use crate::core::search::{SearchOptions, SearchService};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Cached corpus
    pub index: Arc<IndexCache>,

    /// Keyword search over `index`
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let source = source::from_config(&config.source);
        Self::with_source(config, source)
    }

    /// Create services reading from an explicit corpus source
    pub fn with_source(config: Config, source: Arc<dyn CorpusSource>) -> Self {
        let index = Arc::new(IndexCache::new(source));

        let search = Arc::new(SearchService::new(
            Arc::clone(&index),
            SearchOptions::from(&config.search),
        ));

        Self {
            index,
            search,
            config: Arc::new(config),
        }
    }
}
