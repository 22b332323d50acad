//! Integration tests for hookrelay-webhook crate.
//!
//! The reqwest transport is exercised against a loopback listener that
//! answers one request with a canned HTTP response.

use hookrelay_common::test_utils::{init_test_logging, property_testing};
use hookrelay_common::RelayError;
use hookrelay_webhook::{
    HttpTransport, WebhookTransport, INSURANCE_REPORT, NO_DATA_MESSAGE, ROUTES, VERIFY_DATA,
};
use proptest::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// Serves a single response and returns the base URL plus the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/webhook/verify-data"), handle)
}

#[tokio::test]
async fn test_fetch_legacy_shape() {
    init_test_logging();
    let (base, server) = serve_once("200 OK", r#"[{"text":"12 rows"}]"#).await;
    let transport = HttpTransport::new().unwrap();

    let url = VERIFY_DATA.resolve(Some(&base)).unwrap();
    let response = transport.fetch(&url).await.unwrap();
    assert_eq!(response.display_text(), "12 rows");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /webhook/verify-data HTTP/1.1"));
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: application/json"));
}

#[tokio::test]
async fn test_fetch_derived_route() {
    let (base, server) = serve_once("200 OK", r#"{"message":"report ready"}"#).await;
    let transport = HttpTransport::new().unwrap();

    let url = INSURANCE_REPORT.resolve(Some(&base)).unwrap();
    let response = transport.fetch(&url).await.unwrap();
    assert_eq!(response.display_text(), "report ready");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /webhook/insurance-report HTTP/1.1"));
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let (base, server) =
        serve_once("500 Internal Server Error", r#"{"message":"stack trace here"}"#).await;
    let transport = HttpTransport::new().unwrap();

    let url = VERIFY_DATA.resolve(Some(&base)).unwrap();
    let err = transport.fetch(&url).await.unwrap_err();
    assert!(matches!(err, RelayError::Status(500)));

    server.await.unwrap();
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let (base, server) = serve_once("200 OK", "<html>not json</html>").await;
    let transport = HttpTransport::new().unwrap();

    let url = VERIFY_DATA.resolve(Some(&base)).unwrap();
    let err = transport.fetch(&url).await.unwrap_err();
    assert!(matches!(err, RelayError::Decode(_)));
    assert!(err.is_transport());

    server.await.unwrap();
}

#[tokio::test]
async fn test_unexpected_shape_degrades_to_sentinel() {
    let (base, server) = serve_once("200 OK", r#"{"rows":12}"#).await;
    let transport = HttpTransport::new().unwrap();

    let url = VERIFY_DATA.resolve(Some(&base)).unwrap();
    let response = transport.fetch(&url).await.unwrap();
    assert_eq!(response.display_text(), NO_DATA_MESSAGE);

    server.await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new().unwrap();
    let url = Url::parse(&format!("http://{addr}/webhook/verify-data")).unwrap();
    let err = transport.fetch(&url).await.unwrap_err();
    assert!(matches!(err, RelayError::Transport(_)));
}

proptest! {
    #[test]
    fn test_every_route_resolves_under_the_same_root(
        host in property_testing::host_strategy(),
        workflow in property_testing::route_segment_strategy(),
    ) {
        let base = format!("https://{host}/webhook/{workflow}");
        for route in ROUTES {
            let url = route.resolve(Some(&base)).unwrap();
            prop_assert_eq!(url.host_str(), Some(host.as_str()));
            prop_assert!(url.path().starts_with("/webhook/"));
            prop_assert_eq!(route.resolve(Some(&base)).unwrap(), url);
        }
        let verify_url = VERIFY_DATA.resolve(Some(&base)).unwrap();
        prop_assert_eq!(verify_url.as_str(), base.as_str());
    }
}
