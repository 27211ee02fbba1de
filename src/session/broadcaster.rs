use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::evaluator::SessionEvaluator;
use super::store::TokenStore;
use crate::navigation::{Navigator, View};

/// Entry point for anything that needs the session re-evaluated.
pub trait SessionRefresh: Send + Sync {
    fn update_auth_state(&self) -> bool;
}

/// Publishes the authorization state to any number of observers.
///
/// Every trigger (startup, the poll timer, login/register/logout, 401/403 responses)
/// goes through [`SessionBroadcaster::update_auth_state`]. Observers are notified only
/// when the state actually flips. Dropping into the unauthorized state purges the stored
/// credential and sends the user to the sign-in view.
pub struct SessionBroadcaster {
    store: Arc<dyn TokenStore>,
    evaluator: SessionEvaluator,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<bool>,
}

impl SessionBroadcaster {
    pub fn new(
        store: Arc<dyn TokenStore>,
        evaluator: SessionEvaluator,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (state, _) = watch::channel(false);
        Self {
            store,
            evaluator,
            navigator,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Last published state.
    pub fn is_authorized(&self) -> bool {
        *self.state.borrow()
    }

    pub fn evaluator(&self) -> &SessionEvaluator {
        &self.evaluator
    }

    /// Re-evaluates the stored credential and publishes the result if it changed.
    /// Returns the freshly computed state.
    pub fn update_auth_state(&self) -> bool {
        let authorized = loop {
            let credential = self.store.get();
            let authorized = self.evaluator.authorizes(credential.as_deref());
            // a credential saved after the read must survive; evaluate it instead
            if authorized || self.store.clear_if(credential.as_deref()) {
                break authorized;
            }
        };

        let changed = self.state.send_if_modified(|current| {
            if *current == authorized {
                return false;
            }
            *current = authorized;
            true
        });
        if changed {
            tracing::info!(
                authorized,
                login = self.evaluator.login().as_deref().unwrap_or("-"),
                "Session state changed"
            );
        }

        if !authorized {
            self.navigator.navigate(View::SignIn);
        }

        authorized
    }

    /// Evaluates once immediately, then every `period` until the returned task is aborted
    /// or the runtime shuts down.
    pub fn start(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let broadcaster = Arc::clone(self);
        tracing::info!(period_secs = period.as_secs(), "Session polling started");

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                broadcaster.update_auth_state();
            }
        })
    }
}

impl SessionRefresh for SessionBroadcaster {
    fn update_auth_state(&self) -> bool {
        SessionBroadcaster::update_auth_state(self)
    }
}
