//! Best-effort on-disk cache with a TTL based on file modification time.
//!
//! Every fault is recovered locally: unreadable, corrupt or stale entries read
//! as a miss and failed writes are only logged. Entries are never deleted,
//! only superseded by the next write. There is no locking, so a read racing
//! a write on the same key may see a stale or partial file and miss.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use super::types::{CacheEntryInfo, CacheKey};
use crate::constants::cache_ttl;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
    ttl: Duration,
}

impl DiskCache {
    /// Creates a cache rooted at `dir` with the default one-day TTL.
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ttl: Duration::from_secs(cache_ttl::COMPETITIONS_SECONDS),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Reads a fresh entry, or `None` on any miss
    pub async fn read(&self, key: &CacheKey) -> Option<Value> {
        self.read_at(key, SystemTime::now()).await
    }

    /// Reads an entry as seen from `now`. An entry whose age is at least the
    /// TTL is treated as absent.
    #[instrument(skip(self), fields(file = %key.file_name()))]
    pub async fn read_at(&self, key: &CacheKey, now: SystemTime) -> Option<Value> {
        let path = self.path_for(key);

        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache miss: {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to stat cache file {}: {}", path.display(), e);
                return None;
            }
        };

        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(e) => {
                warn!("Cache file {} has no modification time: {}", path.display(), e);
                return None;
            }
        };

        // A modification time in the future counts as just written.
        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        if age >= self.ttl {
            debug!(
                "Cache entry expired: {}, age={:?}, ttl={:?}",
                path.display(),
                age,
                self.ttl
            );
            return None;
        }

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read cache file {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!("Cache hit: {}, age={:?}", path.display(), age);
                Some(value)
            }
            Err(e) => {
                warn!("Ignoring corrupt cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Writes an entry. Failures are logged and otherwise ignored.
    #[instrument(skip(self, value), fields(file = %key.file_name()))]
    pub async fn write(&self, key: &CacheKey, value: &Value) {
        match self.try_write(key, value).await {
            Ok(size) => info!(
                "Cached feed: {}, data_size={}",
                self.path_for(key).display(),
                size
            ),
            Err(e) => warn!(
                "Failed to write cache file {}: {}",
                self.path_for(key).display(),
                e
            ),
        }
    }

    async fn try_write(&self, key: &CacheKey, value: &Value) -> Result<usize, AppError> {
        fs::create_dir_all(&self.dir).await?;
        let content = serde_json::to_string(value)?;
        fs::write(self.path_for(key), &content).await?;
        Ok(content.len())
    }

    /// Lists the JSON files in the cache directory with their age and freshness.
    /// A missing directory yields an empty list.
    pub async fn entries(&self) -> Result<Vec<CacheEntryInfo>, AppError> {
        let mut read_dir = match fs::read_dir(&self.dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let now = SystemTime::now();
        let mut entries = Vec::new();
        while let Some(entry) = read_dir.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !file_name.ends_with(".json") {
                continue;
            }
            let metadata = entry.metadata().await?;
            let modified = metadata.modified()?;
            let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
            entries.push(CacheEntryInfo {
                file_name,
                size_bytes: metadata.len(),
                written_at: DateTime::<Utc>::from(modified),
                age,
                is_fresh: age < self.ttl,
            });
        }
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }
}
