//! Price loading and caching

pub mod cache;
pub mod loader;

pub use cache::{CacheStats, CachedLoader, DEFAULT_MAX_ENTRIES};
pub use loader::{LoadError, MemoryLoader, PriceLoader};
