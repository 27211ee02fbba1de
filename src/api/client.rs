use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::notify::Notifier;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::session::{SessionRefresh, TokenStore};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the residence API.
///
/// Every request carries the stored credential as a bearer token. Every failure is
/// turned into exactly one user notification and then handed back to the caller
/// unchanged; 401 and 403 additionally force a session re-evaluation.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    session: Arc<dyn SessionRefresh>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        store: Arc<dyn TokenStore>,
        session: Arc<dyn SessionRefresh>,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(ApiClient {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            store,
            session,
            notifier,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Starts a request against `path`, relative to the API root.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Sends the request and checks the status. Non-2xx responses become
    /// [`ClientError::Http`], transport failures become [`ClientError::NoConnection`].
    pub async fn send(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let request_id = Uuid::new_v4().to_string();
        let mut builder = builder.header(REQUEST_ID_HEADER, request_id.as_str());
        if let Some(token) = self.store.get() {
            builder = builder.bearer_auth(token);
        }

        let request = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Invalid request: {}", e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let start = Instant::now();

        let result = self.client.execute(request).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    latency_ms,
                    error = %e,
                    "Request failed without response"
                );
                let error = ClientError::NoConnection(e);
                self.report_failure(&error);
                return Err(error);
            }
        };

        let status = response.status();
        tracing::info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "Request completed"
        );

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ClientError::Http { status, body };
        self.report_failure(&error);
        Err(error)
    }

    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to decode response body");
            ClientError::Decode(e.to_string())
        })
    }

    /// Sends the request and discards whatever body comes back.
    pub async fn send_unit(&self, builder: RequestBuilder) -> ClientResult<()> {
        self.send(builder).await.map(|_| ())
    }

    fn report_failure(&self, error: &ClientError) {
        let Some(status) = error.status_code() else {
            return;
        };

        match status {
            0 => self.notifier.error("X0", Some("No connection with server")),
            400 => self
                .notifier
                .warn("Oops", Some("Looks like you tried to send some wrong data")),
            401 => {
                self.notifier
                    .warn("Oops", Some("Looks like you are unauthorized. Try to sign in"));
                self.session.update_auth_state();
            }
            403 => {
                self.notifier.warn(
                    "Oops",
                    Some("Looks like you don't have permissions for this resource"),
                );
                self.session.update_auth_state();
            }
            404 => self.notifier.warn(
                "Oops",
                Some("Looks like server can't find item from your request"),
            ),
            _ => self.report_http_error(error),
        }
    }

    /// Fallback for statuses without a dedicated message.
    fn report_http_error(&self, error: &ClientError) {
        match error {
            ClientError::Http { status, body } if status.is_client_error() => {
                let summary = status.canonical_reason().unwrap_or("Request rejected");
                let detail = (!body.is_empty()).then_some(body.as_str());
                self.notifier.warn(summary, detail);
            }
            _ => {
                tracing::error!(error = %error, "Unexpected API failure");
                self.notifier.error("XXX", Some("Something went wrong"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::notify::{MemoryNotifier, Severity};
    use crate::session::MemoryTokenStore;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSession(AtomicUsize);

    impl SessionRefresh for CountingSession {
        fn update_auth_state(&self) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            false
        }
    }

    fn client(base_url: &str) -> (ApiClient, Arc<MemoryNotifier>, Arc<CountingSession>) {
        let notifier = Arc::new(MemoryNotifier::new());
        let session = Arc::new(CountingSession::default());
        let api = ApiClient::new(
            &Config::with_api_url(base_url),
            Arc::new(MemoryTokenStore::new()),
            session.clone(),
            notifier.clone(),
        )
        .unwrap();
        (api, notifier, session)
    }

    #[test]
    fn test_url_joining() {
        let (api, _, _) = client("http://localhost:8183/");
        assert_eq!(api.base_url(), "http://localhost:8183");
        assert_eq!(api.url("/auth/login"), "http://localhost:8183/auth/login");
        assert_eq!(api.url("room"), "http://localhost:8183/room");
    }

    #[test]
    fn test_server_error_is_generic_failure() {
        let (api, notifier, session) = client("http://localhost:8183");
        api.report_failure(&ClientError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        });

        let received = notifier.take();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].severity, Severity::Error);
        assert_eq!(received[0].detail.as_deref(), Some("Something went wrong"));
        assert_eq!(session.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmapped_client_error_uses_reason_and_body() {
        let (api, notifier, _) = client("http://localhost:8183");
        api.report_failure(&ClientError::Http {
            status: StatusCode::CONFLICT,
            body: "Room already exists".to_string(),
        });

        let received = notifier.take();
        assert_eq!(received[0].severity, Severity::Warn);
        assert_eq!(received[0].summary, "Conflict");
        assert_eq!(received[0].detail.as_deref(), Some("Room already exists"));
    }

    #[test]
    fn test_local_errors_are_not_reported() {
        let (api, notifier, _) = client("http://localhost:8183");
        api.report_failure(&ClientError::Decode("bad json".to_string()));
        assert!(notifier.is_empty());
    }
}
