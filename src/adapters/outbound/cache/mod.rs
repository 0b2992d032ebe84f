/// In-process memoization shared by the metadata and archive adapters
mod eviction;
mod resolution_cache;

pub use eviction::{EvictionPolicy, LeastRecentlyUsed, RetentionPolicy, Unbounded};
pub use resolution_cache::ResolutionCache;
