// HTTP module.
// GET client, the session/task seam it runs on, and the reqwest-backed session.

pub mod client;
pub mod reqwest_session;
pub mod session;
pub mod types;

pub use client::HttpClient;
pub use reqwest_session::{DEFAULT_USER_AGENT, ReqwestDataTask, ReqwestSession};
pub use session::{DataTask, RawCompletion, Session};
pub use types::{ClientResult, HttpResponse, RawOutcome, Request, UrlResponse};
