// HttpClient over the reqwest session, against a loopback server.
// Each test serves one canned HTTP/1.1 response on a random port.

use feed_loader::http::{DEFAULT_USER_AGENT, RawOutcome, Request, Session};
use feed_loader::{ClientError, ClientResult, HttpClient, ReqwestSession};
use reqwest::{StatusCode, Url};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve `response` to the first connection and hand back the raw request head.
async fn serve_once(response: &'static str) -> (Url, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
    });

    let url = Url::parse(&format!("http://{addr}/feed")).unwrap();
    (url, rx)
}

fn make_sut() -> HttpClient<ReqwestSession> {
    HttpClient::new(ReqwestSession::build(DEFAULT_USER_AGENT).unwrap())
}

#[tokio::test]
async fn get_performs_get_request_and_returns_body() {
    let (url, request) = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Length: 8\r\nConnection: close\r\n\r\nany data",
    )
    .await;

    let (data, response) = make_sut().get(url.clone()).await.into_result().unwrap();

    assert_eq!(&data[..], b"any data");
    assert_eq!(response.url, url);
    assert_eq!(response.status, StatusCode::OK);

    let head = request.await.unwrap();
    assert!(head.starts_with("GET /feed HTTP/1.1\r\n"), "request head: {head}");
    assert!(head.to_lowercase().contains("user-agent: feed-loader/"));
}

#[tokio::test]
async fn get_returns_empty_data_for_empty_body() {
    let (url, _request) =
        serve_once("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n").await;

    let (data, response) = make_sut().get(url).await.into_result().unwrap();

    assert!(data.is_empty());
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn get_reports_error_statuses_as_responses() {
    let (url, _request) = serve_once(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\noops",
    )
    .await;

    let (data, response) = make_sut().get(url).await.into_result().unwrap();

    assert_eq!(&data[..], b"oops");
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn get_fails_with_transport_error_when_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = Url::parse(&format!("http://{addr}/feed")).unwrap();

    match make_sut().get(url).await {
        ClientResult::Failure(ClientError::Transport(err)) => {
            assert_eq!(err.domain, "reqwest");
            assert_eq!(err.code, -2);
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

const TRUNCATED_BODY: &str =
    "HTTP/1.1 200 OK\r\nContent-Length: 20\r\nConnection: close\r\n\r\nshort";

#[tokio::test]
async fn body_read_failure_reports_response_and_error() {
    let (url, _request) = serve_once(TRUNCATED_BODY).await;
    let session = ReqwestSession::build(DEFAULT_USER_AGENT).unwrap();
    let (tx, rx) = oneshot::channel();

    let mut task = session.data_task(
        Request::get(url.clone()),
        Box::new(move |outcome: RawOutcome| {
            let _ = tx.send(outcome);
        }),
    );
    task.resume();
    let outcome = rx.await.unwrap();

    assert!(outcome.response.is_some());
    assert!(outcome.error.is_some());
    assert_eq!(outcome.response.unwrap().url(), &url);
    assert_eq!(outcome.error.unwrap().domain, "reqwest");
}

#[tokio::test]
async fn get_fails_when_body_is_truncated() {
    let (url, _request) = serve_once(TRUNCATED_BODY).await;

    let result = make_sut().get(url).await;

    assert!(
        matches!(result, ClientResult::Failure(ClientError::Transport(_))),
        "got {result:?}"
    );
}
