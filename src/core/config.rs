//! Configuration management for the site search engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults matching the site's
//! search page for all settings.

use crate::core::error::{Result, SearchError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Where the corpus comes from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Site origin the payload is served from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the JSON payload on the site
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Read the payload from a local file instead of over HTTP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,

    /// Largest payload accepted, in MB
    #[serde(default = "default_max_payload")]
    pub max_payload_mb: u64,
}

/// Excerpt and highlight configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Characters kept from an excerpt source before the ellipsis
    #[serde(default = "default_excerpt_max_length")]
    pub excerpt_max_length: usize,

    /// Characters kept from a matching title before the ellipsis
    #[serde(default = "default_title_max_length")]
    pub title_max_length: usize,

    /// Characters of context taken on each side of a body match
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,

    /// Excerpt used when neither description nor body can supply one
    #[serde(default = "default_fallback_excerpt")]
    pub fallback_excerpt: String,

    /// Markup inserted before each match
    #[serde(default = "default_highlight_open")]
    pub highlight_open: String,

    /// Markup inserted after each match
    #[serde(default = "default_highlight_close")]
    pub highlight_close: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:4321".to_string()
}

fn default_endpoint() -> String {
    "/api/search-data.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_payload() -> u64 {
    50
}

fn default_excerpt_max_length() -> usize {
    150
}

fn default_title_max_length() -> usize {
    100
}

fn default_context_chars() -> usize {
    50
}

fn default_fallback_excerpt() -> String {
    "No description available.".to_string()
}

fn default_highlight_open() -> String {
    "<mark>".to_string()
}

fn default_highlight_close() -> String {
    "</mark>".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            file: None,
            timeout_sec: default_timeout(),
            max_payload_mb: default_max_payload(),
        }
    }
}

impl SourceConfig {
    /// Full URL of the search payload
    pub fn corpus_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            excerpt_max_length: default_excerpt_max_length(),
            title_max_length: default_title_max_length(),
            context_chars: default_context_chars(),
            fallback_excerpt: default_fallback_excerpt(),
            highlight_open: default_highlight_open(),
            highlight_close: default_highlight_close(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SearchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SITESEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/sitesearch/config.toml)
    /// 3. ./sitesearch.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SITESEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("sitesearch.toml").exists() {
                Self::from_file("sitesearch.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Source configuration
        if let Ok(base_url) = env::var("SITESEARCH_BASE_URL") {
            self.source.base_url = base_url;
        }
        if let Ok(endpoint) = env::var("SITESEARCH_ENDPOINT") {
            self.source.endpoint = endpoint;
        }
        if let Ok(file) = env::var("SITESEARCH_CORPUS_FILE") {
            self.source.file = Some(PathBuf::from(file));
        }
        if let Ok(timeout) = env::var("SITESEARCH_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.source.timeout_sec = t;
            }
        }
        if let Ok(max_mb) = env::var("SITESEARCH_MAX_PAYLOAD_MB") {
            if let Ok(mb) = max_mb.parse() {
                self.source.max_payload_mb = mb;
            }
        }

        // Search configuration
        if let Ok(max_len) = env::var("SITESEARCH_EXCERPT_MAX_LENGTH") {
            if let Ok(len) = max_len.parse() {
                self.search.excerpt_max_length = len;
            }
        }
        if let Ok(max_len) = env::var("SITESEARCH_TITLE_MAX_LENGTH") {
            if let Ok(len) = max_len.parse() {
                self.search.title_max_length = len;
            }
        }
        if let Ok(context) = env::var("SITESEARCH_CONTEXT_CHARS") {
            if let Ok(c) = context.parse() {
                self.search.context_chars = c;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source.file.is_none() {
            if !(self.source.base_url.starts_with("http://")
                || self.source.base_url.starts_with("https://"))
            {
                return Err(SearchError::ConfigError(format!(
                    "Base URL must start with http:// or https://, got '{}'",
                    self.source.base_url
                )));
            }

            if !self.source.endpoint.starts_with('/') {
                return Err(SearchError::ConfigError(
                    "Endpoint must be an absolute path".to_string(),
                ));
            }
        }

        if self.source.timeout_sec == 0 {
            return Err(SearchError::ConfigError(
                "Fetch timeout must be non-zero".to_string(),
            ));
        }

        if self.source.max_payload_mb == 0 {
            return Err(SearchError::ConfigError(
                "Max payload size must be non-zero".to_string(),
            ));
        }

        if self.search.excerpt_max_length == 0 {
            return Err(SearchError::ConfigError(
                "Excerpt max length must be non-zero".to_string(),
            ));
        }

        if self.search.title_max_length == 0 {
            return Err(SearchError::ConfigError(
                "Title max length must be non-zero".to_string(),
            ));
        }

        if self.search.highlight_open.is_empty() || self.search.highlight_close.is_empty() {
            return Err(SearchError::ConfigError(
                "Highlight markers cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        match &self.source.file {
            Some(path) => tracing::info!("  Corpus file: {:?}", path),
            None => tracing::info!("  Corpus URL: {}", self.source.corpus_url()),
        }
        tracing::info!("  Fetch timeout: {}s", self.source.timeout_sec);
        tracing::info!("  Max payload: {} MB", self.source.max_payload_mb);
        tracing::info!(
            "  Excerpt max length: {} chars",
            self.search.excerpt_max_length
        );
        tracing::info!("  Title max length: {} chars", self.search.title_max_length);
        tracing::info!("  Context: {} chars", self.search.context_chars);
    }
}
