// Cache module for the local feed cache.
// Store capability, in-memory and file stores, and the cache writer.

pub mod file;
pub mod loader;
pub mod paths;
pub mod store;

pub use file::FileFeedStore;
pub use loader::LocalFeedLoader;
pub use paths::{FEED_CACHE_FILE, cache_dir, feed_cache_path};
pub use store::{CachedFeed, FeedStore, InMemoryFeedStore};
