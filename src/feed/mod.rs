// Feed item types.
// Domain value plus the serializable form stores persist.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CacheError;

/// An image entry in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

/// Storage representation of a `FeedItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: String,
}

impl From<&FeedItem> for LocalFeedItem {
    fn from(item: &FeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description.clone(),
            location: item.location.clone(),
            image_url: item.image_url.to_string(),
        }
    }
}

impl TryFrom<LocalFeedItem> for FeedItem {
    type Error = CacheError;

    fn try_from(item: LocalFeedItem) -> Result<Self, Self::Error> {
        let image_url = Url::parse(&item.image_url).map_err(|e| {
            CacheError::Other(format!("Invalid cached image URL {}: {}", item.image_url, e))
        })?;

        Ok(Self {
            id: item.id,
            description: item.description,
            location: item.location,
            image_url,
        })
    }
}
