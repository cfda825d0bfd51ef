// feed-loader binary.
// Issues a single GET against FEED_URL and reports the outcome.

use std::process::ExitCode;

use feed_loader::{ClientResult, Config, HttpClient, ReqwestSession};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let session = match ReqwestSession::build(&config.user_agent) {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "could not create session");
            return ExitCode::FAILURE;
        }
    };

    let client = HttpClient::new(session);
    match client.get(config.feed_url.clone()).await {
        ClientResult::Success { data, response } => {
            info!(
                url = %response.url,
                status = %response.status,
                bytes = data.len(),
                "feed fetched"
            );
            ExitCode::SUCCESS
        }
        ClientResult::Failure(e) => {
            error!(url = %config.feed_url, error = %e, "feed fetch failed");
            ExitCode::FAILURE
        }
    }
}
