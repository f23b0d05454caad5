pub mod core;
pub mod fetch_utils;
pub mod http_client;
pub mod jsonp;
pub mod urls;

// Re-export URL utilities
pub use urls::{EndpointCatalog, Feed, full_url, is_absolute, resolve_template};
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
pub use jsonp::unwrap_jsonp;
pub use fetch_utils::{fetch_feed, fetch_text};
// Re-export the feed client
pub use core::{FeedClient, validate_innings};
