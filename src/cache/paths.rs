// Cache path utilities.
// Resolves where the feed cache lives on disk.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// File name of the cached feed inside the cache directory.
pub const FEED_CACHE_FILE: &str = "feed.json";

/// Get the base cache directory (~/.cache/feed-loader on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "feed-loader").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cached feed, under `dir` if given, else under `cache_dir()`.
pub fn feed_cache_path(dir: Option<&Path>) -> Option<PathBuf> {
    match dir {
        Some(dir) => Some(dir.join(FEED_CACHE_FILE)),
        None => cache_dir().map(|dir| dir.join(FEED_CACHE_FILE)),
    }
}
