// Error types for feed-loader.
// Covers transport failures, client result failures, cache and configuration errors.

use thiserror::Error;

/// Failure reported by the underlying transport, passed through uninterpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{domain} error {code}: {message}")]
pub struct TransportError {
    pub domain: String,
    pub code: i64,
    pub message: String,
}

impl TransportError {
    pub fn new(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let code = if let Some(status) = err.status() {
            i64::from(status.as_u16())
        } else if err.is_timeout() {
            -1
        } else if err.is_connect() {
            -2
        } else if err.is_request() {
            -3
        } else if err.is_body() || err.is_decode() {
            -4
        } else {
            0
        };
        Self::new("reqwest", code, err.to_string())
    }
}

/// Failure side of a `ClientResult`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Neither a usable response nor an explicit error came back.
    #[error("Unexpected transport outcome")]
    Unexpected,
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing FEED_URL environment variable")]
    MissingFeedUrl,

    #[error("Invalid feed URL {url:?}: {reason}")]
    InvalidFeedUrl { url: String, reason: String },

    #[error("Invalid user agent: {0}")]
    InvalidUserAgent(String),

    #[error("Could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("No tokio runtime available")]
    NoRuntime,
}

pub type CacheResult<T> = std::result::Result<T, CacheError>;
