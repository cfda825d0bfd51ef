// File-backed feed store.
// Persists the cached feed as a single JSON file, written atomically.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::CacheResult;
use crate::feed::LocalFeedItem;

use super::store::{CachedFeed, FeedStore};

/// Stores the feed at a fixed path.
#[derive(Debug, Clone)]
pub struct FileFeedStore {
    path: PathBuf,
}

impl FileFeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedStore for FileFeedStore {
    fn delete_cached_feed(&self) -> CacheResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cache file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn insert(&self, items: &[LocalFeedItem], timestamp: DateTime<Utc>) -> CacheResult<()> {
        let cached = CachedFeed {
            items: items.to_vec(),
            timestamp,
        };
        let json = serde_json::to_string_pretty(&cached)?;
        write_atomic(&self.path, json.as_bytes())?;
        debug!(path = %self.path.display(), items = items.len(), "cache file written");
        Ok(())
    }

    fn retrieve(&self) -> CacheResult<Option<CachedFeed>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let cached: CachedFeed = serde_json::from_str(&contents)?;
        Ok(Some(cached))
    }
}

/// Write via a sibling temp file and rename over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> CacheResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
