//! Process-wide search entry points.
//!
//! The first call builds a [`Services`] container from
//! [`Config::load`], unless one was installed up front with
//! [`install`]. [`search`] reads the config file on the blocking pool;
//! [`services`] and [`clear_search_cache`] read it on the calling
//! thread. The corpus itself is still only fetched by the first
//! non-blank query.

use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::types::SearchResult;
use once_cell::sync::OnceCell;

static SERVICES: OnceCell<Services> = OnceCell::new();

/// Install the process-wide services before first use
///
/// Returns the services back if the global was already initialized.
/// Installing at startup keeps config file reads off the request path.
pub fn install(services: Services) -> std::result::Result<(), Services> {
    SERVICES.set(services)
}

/// The process-wide services, created from configuration on first use
///
/// Blocks on file I/O the first time if nothing was installed.
pub fn services() -> &'static Services {
    SERVICES.get_or_init(|| build_services(load_config()))
}

/// Like [`services`], but loads configuration off the async executor
async fn services_async() -> &'static Services {
    if let Some(services) = SERVICES.get() {
        return services;
    }

    let config = tokio::task::spawn_blocking(load_config)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Configuration task failed, using defaults");
            Config::default()
        });

    // A racing caller may have initialized first; its services win
    SERVICES.get_or_init(|| build_services(config))
}

fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid search configuration, using defaults");
        Config::default()
    })
}

fn build_services(config: Config) -> Services {
    config.log_config();
    Services::new(config)
}

/// Search the process-wide index
pub async fn search(keyword: &str) -> Vec<SearchResult> {
    if keyword.trim().is_empty() {
        return Vec::new();
    }
    services_async().await.search.search(keyword).await
}

/// Drop the process-wide cached index
pub fn clear_search_cache() {
    services().search.clear_cache();
}
