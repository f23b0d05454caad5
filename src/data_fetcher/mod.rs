pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::FeedClient;
pub use cache::DiskCache;
pub use models::{Circuit, MatchStatus};
