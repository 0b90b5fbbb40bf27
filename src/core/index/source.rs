//! Corpus sources.
//!
//! A source produces the full document list in one call. Every
//! source decodes the same payload: a JSON array of
//! [`SearchRecord`](crate::core::types::SearchRecord) as served by the
//! site's search-data endpoint.

use crate::core::config::SourceConfig;
use crate::core::error::{Result, SearchError};
use crate::core::types::{Document, SearchRecord};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Something the index can be loaded from
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Fetch and decode the whole corpus
    async fn fetch(&self) -> Result<Vec<Document>>;

    /// Short label for log lines (URL, path, ...)
    fn describe(&self) -> String;
}

/// Decode a search payload into documents, preserving payload order
pub fn parse_corpus(payload: &str) -> Result<Vec<Document>> {
    let records: Vec<SearchRecord> = serde_json::from_str(payload)?;
    Ok(records.into_iter().map(Document::from).collect())
}

/// Build the source selected by configuration
pub fn from_config(config: &SourceConfig) -> Arc<dyn CorpusSource> {
    match &config.file {
        Some(path) => Arc::new(FileSource::new(path.clone())),
        None => Arc::new(HttpSource::new(
            config.corpus_url(),
            Duration::from_secs(config.timeout_sec),
            config.max_payload_mb,
        )),
    }
}

/// Body size cap in bytes, saturating for very large settings
fn payload_limit_bytes(max_payload_mb: u64) -> u64 {
    max_payload_mb.saturating_mul(1024 * 1024)
}

/// Fetches the payload over HTTP
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
    max_payload_mb: u64,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration, max_payload_mb: u64) -> Self {
        // Statuses are checked by hand so a 404 reports as HttpStatus, not Network
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        Self {
            url: url.into(),
            agent: ureq::Agent::new_with_config(config),
            max_payload_mb,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn get_blocking(agent: &ureq::Agent, url: &str, max_payload_mb: u64) -> Result<String> {
        let network = |e: ureq::Error| SearchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        let mut response = agent
            .get(url)
            .header("Accept", "application/json")
            .call()
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .body_mut()
            .with_config()
            .limit(payload_limit_bytes(max_payload_mb))
            .read_to_string()
            .map_err(|e| match e {
                ureq::Error::BodyExceedsLimit(_) => SearchError::PayloadTooLarge {
                    limit_mb: max_payload_mb,
                },
                other => network(other),
            })
    }
}

#[async_trait]
impl CorpusSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Document>> {
        let agent = self.agent.clone();
        let url = self.url.clone();
        let max_payload_mb = self.max_payload_mb;

        let payload = tokio::task::spawn_blocking(move || {
            Self::get_blocking(&agent, &url, max_payload_mb)
        })
        .await
        .map_err(|e| SearchError::TaskFailed(e.to_string()))??;

        parse_corpus(&payload)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the payload from a file, e.g. the static site's build output
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Document>> {
        let payload = tokio::fs::read_to_string(&self.path).await?;
        parse_corpus(&payload)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A corpus already resident in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<Document>,
}

impl MemorySource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl CorpusSource for MemorySource {
    async fn fetch(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}
