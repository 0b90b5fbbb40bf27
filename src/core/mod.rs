//! Core domain logic
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Wire records, documents, and results
//! - **xdg**: XDG config directory handling
//! - **index**: Corpus sources and the lazily loaded cache
//! - **search**: Filtering, excerpt selection, and highlighting
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod index;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SearchError};
pub use services::Services;
