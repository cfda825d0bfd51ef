// Feed store capability.
// Defines what the cache writer needs from storage, plus an in-memory store.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CacheError, CacheResult};
use crate::feed::LocalFeedItem;

/// Cached feed with the time it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFeed {
    pub items: Vec<LocalFeedItem>,
    pub timestamp: DateTime<Utc>,
}

/// Storage for the cached feed.
pub trait FeedStore: Send + Sync {
    /// Remove the cached feed. Succeeds when there is nothing to remove.
    fn delete_cached_feed(&self) -> CacheResult<()>;

    /// Replace the cached feed with `items`.
    fn insert(&self, items: &[LocalFeedItem], timestamp: DateTime<Utc>) -> CacheResult<()>;

    fn retrieve(&self) -> CacheResult<Option<CachedFeed>>;
}

impl<S: FeedStore + ?Sized> FeedStore for Arc<S> {
    fn delete_cached_feed(&self) -> CacheResult<()> {
        (**self).delete_cached_feed()
    }

    fn insert(&self, items: &[LocalFeedItem], timestamp: DateTime<Utc>) -> CacheResult<()> {
        (**self).insert(items, timestamp)
    }

    fn retrieve(&self) -> CacheResult<Option<CachedFeed>> {
        (**self).retrieve()
    }
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct InMemoryFeedStore {
    feed: Mutex<Option<CachedFeed>>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CacheResult<MutexGuard<'_, Option<CachedFeed>>> {
        self.feed
            .lock()
            .map_err(|_| CacheError::Other("in-memory feed store lock poisoned".to_string()))
    }
}

impl FeedStore for InMemoryFeedStore {
    fn delete_cached_feed(&self) -> CacheResult<()> {
        self.lock()?.take();
        Ok(())
    }

    fn insert(&self, items: &[LocalFeedItem], timestamp: DateTime<Utc>) -> CacheResult<()> {
        *self.lock()? = Some(CachedFeed {
            items: items.to_vec(),
            timestamp,
        });
        Ok(())
    }

    fn retrieve(&self) -> CacheResult<Option<CachedFeed>> {
        Ok(self.lock()?.clone())
    }
}
