// HTTP GET client over an injected session.
// Starts exactly one data task per call and maps its raw outcome to a ClientResult.

use reqwest::Url;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::ClientError;

use super::session::Session;
use super::types::{ClientResult, RawOutcome, Request};

/// Issues GET requests through a `Session`.
pub struct HttpClient<S> {
    session: S,
}

impl<S: Session> HttpClient<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Start a GET for `url` and deliver the result to `completion`.
    ///
    /// Returns immediately. `completion` runs once, on whatever context the
    /// session reports from.
    pub fn get_with_completion<F>(&self, url: Url, completion: F)
    where
        F: FnOnce(ClientResult) + Send + 'static,
    {
        debug!(url = %url, "GET started");

        let request = Request::get(url.clone());
        let mut task = self.session.data_task(
            request,
            Box::new(move |outcome: RawOutcome| {
                let result = ClientResult::from_raw(outcome);
                log_result(&url, &result);
                completion(result);
            }),
        );
        task.resume();
    }

    /// GET `url` and wait for the result.
    ///
    /// If the session drops the completion without calling it, this resolves
    /// to `ClientError::Unexpected`.
    pub async fn get(&self, url: Url) -> ClientResult {
        let (tx, rx) = oneshot::channel();
        self.get_with_completion(url, move |result| {
            // Receiver gone means the caller stopped waiting.
            let _ = tx.send(result);
        });

        rx.await.unwrap_or(ClientResult::Failure(ClientError::Unexpected))
    }
}

fn log_result(url: &Url, result: &ClientResult) {
    match result {
        ClientResult::Success { data, response } => {
            debug!(url = %url, status = %response.status, bytes = data.len(), "GET finished");
        }
        ClientResult::Failure(ClientError::Unexpected) => {
            warn!(url = %url, "GET returned neither a response nor an error");
        }
        ClientResult::Failure(err) => {
            debug!(url = %url, error = %err, "GET failed");
        }
    }
}
