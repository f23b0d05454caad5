//! BCCI Scores Feed Library
//!
//! A read-through client over the BCCI scores feed that reshapes competitions,
//! standings, schedules and match summaries into compact JSON results, and
//! registers them as named tools and per-circuit resources for an agent server.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bcci_feed::config::Config;
//! use bcci_feed::error::AppError;
//! use bcci_feed::tools::{CricketTools, register_all};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let tools = Arc::new(CricketTools::from_config(&config)?);
//!     let (registry, resources) = register_all(tools);
//!
//!     let live = registry
//!         .call("get_live_tournaments", json!({"circuit": "domestic"}))
//!         .await?;
//!     println!("{live}");
//!
//!     let catalog = resources.read("bcci://competitions/international").await?;
//!     println!("{catalog}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod tools;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::FeedClient;
pub use data_fetcher::cache::DiskCache;
pub use data_fetcher::models::{Circuit, MatchStatus};
pub use error::AppError;
pub use tools::{CricketTools, ResourceRegistry, ToolRegistry, register_all};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
