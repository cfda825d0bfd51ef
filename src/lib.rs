// feed-loader library.
// A GET client behind a swappable session, and a local feed cache writer.

pub mod cache;
pub mod config;
pub mod error;
pub mod feed;
pub mod http;

pub use cache::{FeedStore, FileFeedStore, InMemoryFeedStore, LocalFeedLoader};
pub use config::Config;
pub use error::{CacheError, CacheResult, ClientError, ConfigError, TransportError};
pub use feed::{FeedItem, LocalFeedItem};
pub use http::{ClientResult, HttpClient, HttpResponse, ReqwestSession, Session};
