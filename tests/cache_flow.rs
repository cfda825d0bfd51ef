// LocalFeedLoader writing through the file store.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use feed_loader::{FeedItem, FeedStore, FileFeedStore, LocalFeedItem, LocalFeedLoader};
use reqwest::Url;
use tempfile::TempDir;
use uuid::Uuid;

fn unique_item(n: u32) -> FeedItem {
    FeedItem {
        id: Uuid::new_v4(),
        description: Some(format!("item {n}")),
        location: None,
        image_url: Url::parse(&format!("https://any-url.com/{n}.png")).unwrap(),
    }
}

#[test]
fn save_replaces_file_cache() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileFeedStore::new(temp_dir.path().join("feed.json")));
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let loader = LocalFeedLoader::with_clock(Arc::clone(&store), move || timestamp);

    let first = vec![unique_item(1), unique_item(2)];
    loader.save(&first).unwrap();

    let cached = store.retrieve().unwrap().unwrap();
    assert_eq!(cached.timestamp, timestamp);
    let restored: Vec<FeedItem> = cached
        .items
        .into_iter()
        .map(|item| FeedItem::try_from(item).unwrap())
        .collect();
    assert_eq!(restored, first);

    let second = vec![unique_item(3)];
    loader.save(&second).unwrap();

    let cached = store.retrieve().unwrap().unwrap();
    let expected: Vec<LocalFeedItem> = second.iter().map(LocalFeedItem::from).collect();
    assert_eq!(cached.items, expected);
}

#[test]
fn save_without_items_leaves_empty_cache() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileFeedStore::new(temp_dir.path().join("feed.json")));
    let loader = LocalFeedLoader::new(Arc::clone(&store));

    loader.save(&[unique_item(1)]).unwrap();
    loader.save(&[]).unwrap();

    let cached = store.retrieve().unwrap().unwrap();
    assert!(cached.items.is_empty());
}

#[test]
fn loader_construction_leaves_existing_cache_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileFeedStore::new(temp_dir.path().join("feed.json")));
    store
        .insert(&[LocalFeedItem::from(&unique_item(1))], Utc::now())
        .unwrap();

    let _loader = LocalFeedLoader::new(Arc::clone(&store));

    assert!(store.path().exists());
    assert_eq!(store.retrieve().unwrap().unwrap().items.len(), 1);
}
