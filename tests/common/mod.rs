#![allow(dead_code)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use dorm_client::api::MemoryNotifier;
use dorm_client::config::Config;
use dorm_client::navigation::TracingNavigator;
use dorm_client::session::{Clock, SessionRefresh};
use dorm_client::{create_client_with_clock, ClientState};

pub const NOW: i64 = 1_700_000_000;
const SIGNING_KEY: &[u8] = b"test-signing-key";

type HmacSha256 = Hmac<Sha256>;

/// HS256 credential shaped like the ones the API issues.
pub fn sign(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(json!({"alg": "HS256", "typ": "JWT"}).to_string());
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    let signing_input = format!("{}.{}", header, body);

    let mut mac = HmacSha256::new_from_slice(SIGNING_KEY).unwrap();
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    format!("{}.{}", signing_input, signature)
}

pub fn token(sub: &str, role: &str, exp: i64) -> String {
    sign(json!({"sub": sub, "role": role, "exp": exp, "iat": exp - 3600}))
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct FixedClock(AtomicI64);

impl FixedClock {
    pub fn new(now: i64) -> Self {
        Self(AtomicI64::new(now))
    }

    pub fn advance(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct TestClient {
    pub state: ClientState,
    pub notifier: Arc<MemoryNotifier>,
    pub navigator: Arc<TracingNavigator>,
    pub clock: Arc<FixedClock>,
}

pub fn client(api_url: &str) -> TestClient {
    client_with_config(Config::with_api_url(api_url))
}

pub fn client_with_config(config: Config) -> TestClient {
    let notifier = Arc::new(MemoryNotifier::new());
    let navigator = Arc::new(TracingNavigator::new());
    let clock = Arc::new(FixedClock::new(NOW));
    let state = create_client_with_clock(config, navigator.clone(), notifier.clone(), clock.clone())
        .unwrap();
    TestClient {
        state,
        notifier,
        navigator,
        clock,
    }
}

/// Stands in for the broadcaster and only counts how often it was asked to re-evaluate.
#[derive(Default)]
pub struct CountingSession(AtomicUsize);

impl CountingSession {
    pub fn calls(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl SessionRefresh for CountingSession {
    fn update_auth_state(&self) -> bool {
        self.0.fetch_add(1, Ordering::SeqCst);
        true
    }
}
