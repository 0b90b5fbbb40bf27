//! sitesearch - client-side search for static article collections
//!
//! Loads a site's search payload (a JSON array of articles) once per
//! process, then answers keyword queries with substring matching
//! over title, description, and body. Each hit carries a highlighted
//! title and a short highlighted excerpt.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - index (corpus sources, load-once cache)
//!   - search (filter, excerpt, highlight)
//!   - services (unified service container)
//!
//! - **global**: process-wide `search` / `clear_search_cache`
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() {
//! let results = sitesearch::search("rust").await;
//! for result in results {
//!     println!("{} {}", result.url, result.excerpt);
//! }
//! sitesearch::clear_search_cache();
//! # }
//! ```

pub mod core;
pub mod global;

pub use crate::core::config::Config;
pub use crate::core::error::{Result, SearchError};
pub use crate::core::services::Services;
pub use crate::core::types::*;
pub use global::{clear_search_cache, search};
