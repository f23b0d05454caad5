pub mod disk_cache;
pub mod types;

// Re-export cache types
pub use types::*;
// Re-export the disk cache
pub use disk_cache::DiskCache;
