//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers, default endpoints and
//! environment variable names used throughout the crate.

/// Default base URL of the scores feed
pub const DEFAULT_API_DOMAIN: &str = "https://scores.bcci.tv";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Name used for the config, cache and log directories
pub const APP_DIR_NAME: &str = "bcci_feed";

/// Default log file name
pub const LOG_FILE_NAME: &str = "bcci_feed.log";

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for the competition catalogs (24 hours)
    pub const COMPETITIONS_SECONDS: u64 = 86400;
}

/// Innings bounds for a single match
pub mod innings {
    /// First innings index accepted by the per-innings endpoints
    pub const MIN: u32 = 1;

    /// Last innings index accepted by the per-innings endpoints
    pub const MAX: u32 = 4;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "BCCI_API_DOMAIN";

    /// Environment variable for the international innings URL template override
    pub const INNINGS_URL: &str = "BCCI_INNINGS_URL";

    /// Environment variable for cache directory override
    pub const CACHE_DIR: &str = "BCCI_CACHE_DIR";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "BCCI_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "BCCI_HTTP_TIMEOUT";
}
