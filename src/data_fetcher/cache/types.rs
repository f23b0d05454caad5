//! Cache key and entry metadata

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::data_fetcher::api::Feed;
use crate::data_fetcher::models::Circuit;

/// Identity of a cached feed: one entry per (feed type, circuit) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub feed: Feed,
    pub circuit: Circuit,
}

impl CacheKey {
    pub fn new(feed: Feed, circuit: Circuit) -> Self {
        Self { feed, circuit }
    }

    /// Cache key for a circuit's competition catalog
    pub fn competitions(circuit: Circuit) -> Self {
        Self::new(Feed::Competitions, circuit)
    }

    /// File name of the entry inside the cache directory
    pub fn file_name(&self) -> String {
        format!("{}_{}.json", self.feed.as_str(), self.circuit.as_str())
    }
}

/// Metadata about one file in the cache directory, for monitoring
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntryInfo {
    pub file_name: String,
    pub size_bytes: u64,
    pub written_at: DateTime<Utc>,
    pub age: Duration,
    pub is_fresh: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_file_names_do_not_collide_across_circuits() {
        let domestic = CacheKey::competitions(Circuit::Domestic);
        let international = CacheKey::competitions(Circuit::International);
        assert_eq!(domestic.file_name(), "competitions_domestic.json");
        assert_eq!(international.file_name(), "competitions_international.json");
        assert_ne!(domestic.file_name(), international.file_name());
    }
}
