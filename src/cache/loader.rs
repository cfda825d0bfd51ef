// Local feed cache writer.
// Replaces the cached feed: delete first, insert only after a successful delete.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::CacheResult;
use crate::feed::{FeedItem, LocalFeedItem};

use super::store::FeedStore;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Writes feed items into a `FeedStore`.
///
/// Construction never touches the store.
pub struct LocalFeedLoader<S> {
    store: S,
    current_date: Clock,
}

impl<S: FeedStore> LocalFeedLoader<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Utc::now)
    }

    /// Use `current_date` to timestamp inserted feeds.
    pub fn with_clock<F>(store: S, current_date: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            store,
            current_date: Box::new(current_date),
        }
    }

    /// Replace the cache with `items`.
    ///
    /// Deletes exactly once per call, whatever `items` holds. A failed delete
    /// is returned as is and nothing is inserted.
    pub fn save(&self, items: &[FeedItem]) -> CacheResult<()> {
        self.store
            .delete_cached_feed()
            .inspect_err(|e| warn!(error = %e, "cache deletion failed"))?;
        debug!("cache deleted");

        let local: Vec<LocalFeedItem> = items.iter().map(LocalFeedItem::from).collect();
        let timestamp = (self.current_date)();
        self.store
            .insert(&local, timestamp)
            .inspect_err(|e| warn!(error = %e, "cache insertion failed"))?;
        debug!(items = local.len(), %timestamp, "cache inserted");

        Ok(())
    }
}
