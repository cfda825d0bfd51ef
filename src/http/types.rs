// HTTP transport types.
// Plain data passed between the client and a session.

use bytes::Bytes;
use reqwest::{Method, StatusCode, Url};

use crate::error::{ClientError, TransportError};

/// A single request handed to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
        }
    }
}

/// Response metadata carried from the session to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: Url,
    pub status: StatusCode,
}

/// Response as reported by a session. Only the `Http` variant carries a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlResponse {
    Http(HttpResponse),
    Other { url: Url },
}

impl UrlResponse {
    pub fn url(&self) -> &Url {
        match self {
            UrlResponse::Http(response) => &response.url,
            UrlResponse::Other { url } => url,
        }
    }

    /// Coerce into HTTP response metadata, if this is an HTTP response.
    pub fn into_http(self) -> Option<HttpResponse> {
        match self {
            UrlResponse::Http(response) => Some(response),
            UrlResponse::Other { .. } => None,
        }
    }
}

impl From<HttpResponse> for UrlResponse {
    fn from(response: HttpResponse) -> Self {
        UrlResponse::Http(response)
    }
}

/// Unvalidated outcome reported by a session. Any combination of fields may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutcome {
    pub data: Option<Bytes>,
    pub response: Option<UrlResponse>,
    pub error: Option<TransportError>,
}

impl RawOutcome {
    pub fn new(
        data: Option<Bytes>,
        response: Option<UrlResponse>,
        error: Option<TransportError>,
    ) -> Self {
        Self {
            data,
            response,
            error,
        }
    }

    pub fn failed(error: TransportError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Validated result of a GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientResult {
    Success { data: Bytes, response: HttpResponse },
    Failure(ClientError),
}

impl ClientResult {
    /// Map a raw session outcome.
    ///
    /// An error always wins. Otherwise an HTTP response yields success, with
    /// missing data treated as an empty body. Everything else is
    /// `ClientError::Unexpected`.
    pub fn from_raw(outcome: RawOutcome) -> Self {
        let RawOutcome {
            data,
            response,
            error,
        } = outcome;

        if let Some(error) = error {
            return ClientResult::Failure(ClientError::Transport(error));
        }

        match response.and_then(UrlResponse::into_http) {
            Some(response) => ClientResult::Success {
                data: data.unwrap_or_default(),
                response,
            },
            None => ClientResult::Failure(ClientError::Unexpected),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ClientResult::Success { .. })
    }

    pub fn into_result(self) -> std::result::Result<(Bytes, HttpResponse), ClientError> {
        match self {
            ClientResult::Success { data, response } => Ok((data, response)),
            ClientResult::Failure(error) => Err(error),
        }
    }
}
