//! Lazily loaded, process-lifetime document index.
//!
//! The index is fetched from its [`CorpusSource`] on first use and
//! reused until [`IndexCache::clear`] is called. It is never patched
//! in place and never refreshed behind the caller's back.
//!
//! # States
//!
//! ```text
//! Unloaded --load ok--> Loaded(docs) --clear--> Unloaded
//!    |  ^
//!    |  +------ next ensure_loaded() retries
//!    +--load err--> Failed(reason)
//! ```

pub mod source;

pub use source::{parse_corpus, CorpusSource, FileSource, HttpSource, MemorySource};

use crate::core::error::Result;
use crate::core::types::Document;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;
use tokio::sync::Mutex;

/// Snapshot of the cache state
#[derive(Debug, Clone)]
pub enum IndexState {
    /// Nothing loaded yet, or cleared
    Unloaded,

    /// Corpus resident in memory
    Loaded(Arc<[Document]>),

    /// Last load attempt failed; behaves like `Unloaded` for the next call
    Failed(String),
}

/// Owner of the cached corpus
pub struct IndexCache {
    source: Arc<dyn CorpusSource>,
    state: RwLock<IndexState>,
    // Held across the fetch so concurrent first queries share one load
    load_gate: Mutex<()>,
    load_count: AtomicUsize,
}

impl IndexCache {
    pub fn new(source: Arc<dyn CorpusSource>) -> Self {
        Self {
            source,
            state: RwLock::new(IndexState::Unloaded),
            load_gate: Mutex::new(()),
            load_count: AtomicUsize::new(0),
        }
    }

    /// Return the corpus, fetching it if nothing is cached
    ///
    /// A failed fetch leaves the cache empty and returns the error;
    /// the following call tries again.
    pub async fn ensure_loaded(&self) -> Result<Arc<[Document]>> {
        if let Some(documents) = self.cached() {
            tracing::debug!(documents = documents.len(), "Index cache hit");
            return Ok(documents);
        }

        let _gate = self.load_gate.lock().await;

        // A concurrent caller may have finished the load while we waited
        if let Some(documents) = self.cached() {
            return Ok(documents);
        }

        self.load_count.fetch_add(1, Ordering::Relaxed);
        let source = self.source.describe();
        let start = Instant::now();
        tracing::info!(source = %source, "Loading search index");

        match self.source.fetch().await {
            Ok(documents) => {
                let documents: Arc<[Document]> = documents.into();
                *self.write_state() = IndexState::Loaded(Arc::clone(&documents));
                tracing::info!(
                    source = %source,
                    documents = documents.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Search index loaded"
                );
                Ok(documents)
            }
            Err(e) => {
                *self.write_state() = IndexState::Failed(e.to_string());
                tracing::warn!(
                    source = %source,
                    error = %e,
                    transient = e.is_transient(),
                    "Failed to initialize search data"
                );
                Err(e)
            }
        }
    }

    /// Drop the cached corpus; the next query loads it again
    pub fn clear(&self) {
        *self.write_state() = IndexState::Unloaded;
        tracing::info!("Search index cache cleared");
    }

    pub fn state(&self) -> IndexState {
        self.read_state().clone()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.read_state(), IndexState::Loaded(_))
    }

    /// Number of fetches attempted over the cache's lifetime
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::Relaxed)
    }

    fn cached(&self) -> Option<Arc<[Document]>> {
        match &*self.read_state() {
            IndexState::Loaded(documents) => Some(Arc::clone(documents)),
            IndexState::Unloaded | IndexState::Failed(_) => None,
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, IndexState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
