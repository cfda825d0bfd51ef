// Production session backed by reqwest.
// Runs each resumed task on a tokio runtime and reports the raw outcome.

use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use tokio::runtime::Handle;
use tracing::trace;

use crate::error::ConfigError;

use super::session::{DataTask, RawCompletion, Session};
use super::types::{HttpResponse, RawOutcome, Request, UrlResponse};

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("feed-loader/", env!("CARGO_PKG_VERSION"));

/// Session that performs real network requests.
#[derive(Debug, Clone)]
pub struct ReqwestSession {
    client: Client,
    runtime: Handle,
}

impl ReqwestSession {
    pub fn new(client: Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Build a session on the current tokio runtime with the given user agent.
    pub fn build(user_agent: &str) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| ConfigError::InvalidUserAgent(e.to_string()))?,
        );

        let client = Client::builder().default_headers(headers).build()?;
        let runtime = Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;

        Ok(Self::new(client, runtime))
    }
}

impl Session for ReqwestSession {
    fn data_task(&self, request: Request, completion: RawCompletion) -> Box<dyn DataTask> {
        Box::new(ReqwestDataTask {
            client: self.client.clone(),
            runtime: self.runtime.clone(),
            request,
            completion: Some(completion),
        })
    }
}

/// A pending reqwest exchange. Resuming more than once has no further effect.
pub struct ReqwestDataTask {
    client: Client,
    runtime: Handle,
    request: Request,
    completion: Option<RawCompletion>,
}

impl DataTask for ReqwestDataTask {
    fn resume(&mut self) {
        let Some(completion) = self.completion.take() else {
            return;
        };

        let client = self.client.clone();
        let request = self.request.clone();
        self.runtime.spawn(async move {
            completion(perform(&client, request).await);
        });
    }
}

/// Execute a request. Every status code is reported as a response.
async fn perform(client: &Client, request: Request) -> RawOutcome {
    trace!(method = %request.method, url = %request.url, "sending request");

    let response = match client.request(request.method, request.url).send().await {
        Ok(response) => response,
        Err(err) => return RawOutcome::failed(err.into()),
    };

    let metadata = HttpResponse {
        url: response.url().clone(),
        status: response.status(),
    };

    match response.bytes().await {
        Ok(data) => RawOutcome::new(Some(data), Some(UrlResponse::Http(metadata)), None),
        Err(err) => RawOutcome::new(None, Some(UrlResponse::Http(metadata)), Some(err.into())),
    }
}
