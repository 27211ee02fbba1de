use chrono::Utc;
use std::sync::Arc;

use super::credential::{Claims, Role};
use super::store::TokenStore;

/// Source of "now" in epoch seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Derives authorization state from whatever credential is currently stored.
/// Read-only: it never touches the store beyond `get`.
#[derive(Clone)]
pub struct SessionEvaluator {
    store: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
}

impl SessionEvaluator {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TokenStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn current_claims(&self) -> Option<Claims> {
        let token = self.store.get()?;
        Claims::decode(&token)
    }

    /// True only for a stored, well-formed credential that has not yet expired.
    pub fn is_authorized(&self) -> bool {
        self.authorizes(self.store.get().as_deref())
    }

    /// Same check as [`is_authorized`](Self::is_authorized), against a credential the
    /// caller already read from the store.
    pub fn authorizes(&self, credential: Option<&str>) -> bool {
        match credential.and_then(Claims::decode) {
            Some(claims) => !claims.is_expired_at(self.clock.now()),
            None => false,
        }
    }

    /// Role of the signed-in user. Absent unless the session is authorized.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authorized() {
            return None;
        }
        self.current_claims().map(|claims| claims.role)
    }

    /// Login of the signed-in user. Absent unless the session is authorized.
    pub fn login(&self) -> Option<String> {
        if !self.is_authorized() {
            return None;
        }
        self.current_claims().map(|claims| claims.sub)
    }

    /// Seconds until the stored credential expires, if it is still valid.
    pub fn expires_in(&self) -> Option<i64> {
        if !self.is_authorized() {
            return None;
        }
        self.current_claims()
            .map(|claims| claims.exp - self.clock.now())
    }
}

#[cfg(test)]
pub(crate) use testing::FixedClock;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryTokenStore;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn token_with(payload: serde_json::Value) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\"}"),
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    fn setup() -> (Arc<MemoryTokenStore>, Arc<FixedClock>, SessionEvaluator) {
        let store = Arc::new(MemoryTokenStore::new());
        let clock = Arc::new(FixedClock::new(NOW));
        let evaluator = SessionEvaluator::with_clock(store.clone(), clock.clone());
        (store, clock, evaluator)
    }

    #[test]
    fn test_no_credential_is_unauthorized() {
        let (_, _, evaluator) = setup();
        assert!(!evaluator.is_authorized());
        assert_eq!(evaluator.role(), None);
        assert_eq!(evaluator.login(), None);
    }

    #[test]
    fn test_valid_credential() {
        let (store, _, evaluator) = setup();
        store.save(&token_with(json!({"sub": "alice", "role": "RESIDENT", "exp": NOW + 3600})));

        assert!(evaluator.is_authorized());
        assert_eq!(evaluator.role(), Some(Role::Resident));
        assert_eq!(evaluator.login(), Some("alice".to_string()));
        assert_eq!(evaluator.expires_in(), Some(3600));
    }

    #[test]
    fn test_claim_reads_are_repeatable() {
        let (store, _, evaluator) = setup();
        store.save(&token_with(json!({"sub": "m", "role": "MANAGER", "exp": NOW + 10})));
        for _ in 0..3 {
            assert_eq!(evaluator.role(), Some(Role::Manager));
            assert_eq!(evaluator.login(), Some("m".to_string()));
        }
    }

    #[test]
    fn test_expiry_is_strict() {
        let (store, clock, evaluator) = setup();
        store.save(&token_with(json!({"sub": "alice", "role": "RESIDENT", "exp": NOW + 1})));
        assert!(evaluator.is_authorized());

        clock.advance(1);
        assert!(!evaluator.is_authorized());
        assert_eq!(evaluator.role(), None);
        assert_eq!(evaluator.login(), None);
    }

    #[test]
    fn test_missing_claim_is_unauthorized() {
        let (store, _, evaluator) = setup();
        store.save(&token_with(json!({"sub": "alice", "exp": NOW + 3600})));
        assert!(!evaluator.is_authorized());
        assert_eq!(evaluator.login(), None);
    }

    #[test]
    fn test_corrupt_credential_fails_closed() {
        let (store, _, evaluator) = setup();
        store.save("definitely-not-a-token");
        assert!(!evaluator.is_authorized());
        assert_eq!(evaluator.expires_in(), None);
    }

    #[test]
    fn test_evaluator_never_mutates_store() {
        let (store, clock, evaluator) = setup();
        let token = token_with(json!({"sub": "alice", "role": "RESIDENT", "exp": NOW}));
        store.save(&token);
        clock.set(NOW + 100);

        assert!(!evaluator.is_authorized());
        assert_eq!(store.get(), Some(token));
    }
}
