use std::sync::Arc;

use crate::navigation::{Navigator, Route, View};
use crate::session::SessionEvaluator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToSignIn,
    RedirectToForbidden,
}

/// Decides whether a view may be entered with the current session.
pub struct RouteGuard {
    evaluator: SessionEvaluator,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(evaluator: SessionEvaluator, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            evaluator,
            navigator,
        }
    }

    /// Pure decision, no navigation.
    pub fn decide(&self, route: &Route) -> GuardDecision {
        if !route.guarded {
            return GuardDecision::Allow;
        }
        if !self.evaluator.is_authorized() {
            return GuardDecision::RedirectToSignIn;
        }

        match (route.roles, self.evaluator.role()) {
            (None, _) => GuardDecision::Allow,
            (Some(_), Some(role)) if route.admits(role) => GuardDecision::Allow,
            // credential expired between the two reads
            (Some(_), None) => GuardDecision::RedirectToSignIn,
            (Some(_), Some(_)) => GuardDecision::RedirectToForbidden,
        }
    }

    /// Runs the guard for `route`. On a redirect the navigator is moved to the redirect
    /// target before the decision is returned, so the denied view is never entered.
    pub fn can_activate(&self, route: &Route) -> GuardDecision {
        let decision = self.decide(route);
        match decision {
            GuardDecision::Allow => {}
            GuardDecision::RedirectToSignIn => {
                tracing::info!(view = %route.view, "Not signed in, redirecting to sign-in");
                self.navigator.navigate(View::SignIn);
            }
            GuardDecision::RedirectToForbidden => {
                tracing::warn!(
                    view = %route.view,
                    role = ?self.evaluator.role(),
                    "Role not permitted, redirecting to forbidden"
                );
                self.navigator.navigate(View::Forbidden);
            }
        }
        decision
    }

    /// Resolves `path` to a view, guards it, and returns where navigation ended up.
    pub fn navigate(&self, path: &str) -> View {
        let view = View::resolve(path);
        if self.can_activate(&view.route()) == GuardDecision::Allow {
            self.navigator.navigate(view);
        }
        self.navigator.current()
    }
}
