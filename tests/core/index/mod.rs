//! Index provider tests
//!
//! Load-once caching, retry after failure, and each corpus source.
