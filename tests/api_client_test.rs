mod common;

use mockito::{Matcher, Server};
use reqwest::{Method, StatusCode};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::{token, CountingSession, NOW};
use dorm_client::api::{ApiClient, MemoryNotifier, Severity};
use dorm_client::config::Config;
use dorm_client::error::ClientError;
use dorm_client::session::{MemoryTokenStore, TokenStore};

struct Harness {
    api: ApiClient,
    store: Arc<MemoryTokenStore>,
    notifier: Arc<MemoryNotifier>,
    session: Arc<CountingSession>,
}

fn harness(config: Config) -> Harness {
    let store = Arc::new(MemoryTokenStore::new());
    let notifier = Arc::new(MemoryNotifier::new());
    let session = Arc::new(CountingSession::default());
    let api = ApiClient::new(&config, store.clone(), session.clone(), notifier.clone()).unwrap();
    Harness {
        api,
        store,
        notifier,
        session,
    }
}

async fn fail_with(status: usize, body: &str) -> (Harness, ClientError) {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/bid/my")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await;

    let h = harness(Config::with_api_url(server.url()));
    let err = h
        .api
        .send_unit(h.api.request(Method::GET, "bid/my"))
        .await
        .unwrap_err();
    (h, err)
}

#[tokio::test]
async fn test_bearer_and_request_id_are_attached() {
    let mut server = Server::new_async().await;
    let credential = token("alice", "RESIDENT", NOW + 3600);
    let m = server
        .mock("GET", "/auth/profile")
        .match_header("authorization", format!("Bearer {}", credential).as_str())
        .match_header("x-request-id", Matcher::Regex(r"^[0-9a-f-]{36}$".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"Alice","surname":"Smith","role":"RESIDENT","university":null,"dormitory":"Dorm 1","roomNumber":12}"#)
        .create_async()
        .await;

    let h = harness(Config::with_api_url(server.url()));
    h.store.save(&credential);
    let profile: dorm_client::models::Profile = h
        .api
        .send_json(h.api.request(Method::GET, "auth/profile"))
        .await
        .unwrap();

    m.assert_async().await;
    assert_eq!(profile.room_number, Some(12));
    assert!(h.notifier.is_empty());
}

#[tokio::test]
async fn test_no_credential_sends_no_authorization() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/auth/login")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .create_async()
        .await;

    let h = harness(Config::with_api_url(server.url()));
    h.api
        .send_unit(h.api.request(Method::POST, "auth/login"))
        .await
        .unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_notifies_once_and_reevaluates_once() {
    let (h, err) = fail_with(401, "").await;

    assert!(matches!(err, ClientError::Http { status, .. } if status == StatusCode::UNAUTHORIZED));
    let received = h.notifier.take();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].severity, Severity::Warn);
    assert_eq!(received[0].summary, "Oops");
    assert_eq!(
        received[0].detail.as_deref(),
        Some("Looks like you are unauthorized. Try to sign in")
    );
    assert_eq!(h.session.calls(), 1);
}

#[tokio::test]
async fn test_forbidden_notifies_once_and_reevaluates_once() {
    let (h, err) = fail_with(403, "").await;

    assert_eq!(err.status_code(), Some(403));
    let received = h.notifier.take();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].detail.as_deref(),
        Some("Looks like you don't have permissions for this resource")
    );
    assert_eq!(h.session.calls(), 1);
}

#[tokio::test]
async fn test_bad_request_and_not_found_messages() {
    let (h, err) = fail_with(400, "").await;
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(
        h.notifier.take()[0].detail.as_deref(),
        Some("Looks like you tried to send some wrong data")
    );
    assert_eq!(h.session.calls(), 0);

    let (h, _) = fail_with(404, "").await;
    let received = h.notifier.take();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].severity, Severity::Warn);
    assert_eq!(
        received[0].detail.as_deref(),
        Some("Looks like server can't find item from your request")
    );
    assert_eq!(h.session.calls(), 0);
}

#[tokio::test]
async fn test_other_client_error_passes_body_through() {
    let (h, err) = fail_with(409, "Login already taken").await;

    match err {
        ClientError::Http { status, body } => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(body, "Login already taken");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    let received = h.notifier.take();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].summary, "Conflict");
    assert_eq!(received[0].detail.as_deref(), Some("Login already taken"));
}

#[tokio::test]
async fn test_server_error_is_generic() {
    let (h, err) = fail_with(503, "maintenance").await;

    assert_eq!(err.status_code(), Some(503));
    let received = h.notifier.take();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].severity, Severity::Error);
    assert_eq!(received[0].summary, "XXX");
    assert_eq!(received[0].detail.as_deref(), Some("Something went wrong"));
    assert_eq!(h.session.calls(), 0);
}

#[tokio::test]
async fn test_refused_connection_is_status_zero() {
    // bind then drop to get a port nothing listens on
    let port = TcpListener::bind(("127.0.0.1", 0))
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let h = harness(Config::with_api_url(format!("http://127.0.0.1:{}", port)));
    let err = h
        .api
        .send_unit(h.api.request(Method::GET, "room"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NoConnection(_)));
    assert_eq!(err.status_code(), Some(0));
    let received = h.notifier.take();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].severity, Severity::Error);
    assert_eq!(received[0].summary, "X0");
    assert_eq!(received[0].detail.as_deref(), Some("No connection with server"));
    assert_eq!(h.session.calls(), 0);
}

#[tokio::test]
async fn test_timeout_is_status_zero() {
    let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        thread::sleep(Duration::from_secs(3));
        let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
    });

    let mut config = Config::with_api_url(format!("http://{}", addr));
    config.request_timeout_secs = 1;
    let h = harness(config);

    let err = h
        .api
        .send_unit(h.api.request(Method::GET, "payment/info/self"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(0));
    assert_eq!(h.notifier.take()[0].summary, "X0");
}

#[tokio::test]
async fn test_undecodable_body_is_not_a_notification() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/room")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let h = harness(Config::with_api_url(server.url()));
    let result: Result<Vec<dorm_client::models::Room>, _> =
        h.api.send_json(h.api.request(Method::GET, "room")).await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
    assert!(h.notifier.is_empty());
}
