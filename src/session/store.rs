use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Opaque credential storage. No validation happens at this layer.
pub trait TokenStore: Send + Sync {
    fn save(&self, credential: &str);
    fn get(&self) -> Option<String>;
    fn clear(&self);

    /// Clears the store only if it still holds `expected`. Returns whether it did.
    fn clear_if(&self, expected: Option<&str>) -> bool;
}

fn holds(current: &Option<Arc<String>>, expected: Option<&str>) -> bool {
    let current = current
        .as_deref()
        .map(String::as_str)
        .filter(|token| !token.is_empty());
    current == expected
}

/// Credential held for the lifetime of the client process and never written to disk,
/// so a restart always starts signed out.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: ArcSwapOption<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, credential: &str) {
        self.token.store(Some(Arc::new(credential.to_string())));
        tracing::debug!("Credential stored");
    }

    fn get(&self) -> Option<String> {
        self.token
            .load_full()
            .filter(|token| !token.is_empty())
            .map(|token| token.as_ref().clone())
    }

    fn clear(&self) {
        if self.token.swap(None).is_some() {
            tracing::debug!("Credential cleared");
        }
    }

    fn clear_if(&self, expected: Option<&str>) -> bool {
        let previous = self.token.rcu(|current| {
            if holds(current, expected) {
                None
            } else {
                current.clone()
            }
        });
        let cleared = holds(&previous, expected);
        if cleared && previous.is_some() {
            tracing::debug!("Credential cleared");
        }
        cleared
    }
}
