//! Routed views, their access requirements, and the navigator that moves between them.

use arc_swap::ArcSwap;
use std::fmt;

use crate::session::Role;

const INOUT_ROLES: &[Role] = &[Role::Guard, Role::Manager, Role::Resident];
const BID_ROLES: &[Role] = &[Role::NonResident, Role::Resident, Role::Manager];
const PAYMENT_ROLES: &[Role] = &[Role::Resident, Role::Manager];
const MANAGER_ONLY: &[Role] = &[Role::Manager];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    SignIn,
    Forbidden,
    Notifications,
    InOut,
    Bids,
    Payment,
    Residents,
    Staff,
    University,
    Dormitory,
    Room,
    Eviction,
}

impl View {
    pub const ALL: [View; 12] = [
        View::SignIn,
        View::Forbidden,
        View::Notifications,
        View::InOut,
        View::Bids,
        View::Payment,
        View::Residents,
        View::Staff,
        View::University,
        View::Dormitory,
        View::Room,
        View::Eviction,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::SignIn => "auth",
            View::Forbidden => "forbidden",
            View::Notifications => "notifications",
            View::InOut => "inout",
            View::Bids => "bids",
            View::Payment => "payment",
            View::Residents => "residents",
            View::Staff => "staff",
            View::University => "university",
            View::Dormitory => "dormitory",
            View::Room => "room",
            View::Eviction => "eviction",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        let path = path.trim().trim_matches('/');
        View::ALL.into_iter().find(|view| view.path() == path)
    }

    /// Unknown and empty paths land on the sign-in view.
    pub fn resolve(path: &str) -> View {
        View::from_path(path).unwrap_or(View::SignIn)
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::SignIn => "Sign in",
            View::Forbidden => "Forbidden",
            View::Notifications => "Notifications",
            View::InOut => "In/Out",
            View::Bids => "Bids",
            View::Payment => "Payment",
            View::Residents => "Residents",
            View::Staff => "Staff",
            View::University => "University",
            View::Dormitory => "Dormitory",
            View::Room => "Room",
            View::Eviction => "Evictions",
        }
    }

    pub fn route(&self) -> Route {
        let (guarded, roles) = match self {
            View::SignIn | View::Forbidden => (false, None),
            View::Notifications => (true, None),
            View::InOut => (true, Some(INOUT_ROLES)),
            View::Bids => (true, Some(BID_ROLES)),
            View::Payment => (true, Some(PAYMENT_ROLES)),
            View::Residents
            | View::Staff
            | View::University
            | View::Dormitory
            | View::Room
            | View::Eviction => (true, Some(MANAGER_ONLY)),
        };
        Route {
            view: *self,
            guarded,
            roles,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// Access requirements of one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub view: View,
    /// Whether the route guard runs at all.
    pub guarded: bool,
    /// `None` admits any authenticated role.
    pub roles: Option<&'static [Role]>,
}

impl Route {
    pub fn admits(&self, role: Role) -> bool {
        self.roles.map_or(true, |roles| roles.contains(&role))
    }
}

/// Every routed view with its requirements, in declaration order.
pub fn routes() -> Vec<Route> {
    View::ALL.iter().map(View::route).collect()
}

/// Views offered in the navigation menu for a role. Nothing is offered without a role.
pub fn menu_for(role: Option<Role>) -> Vec<View> {
    let role_pages: &[View] = match role {
        None => return Vec::new(),
        Some(Role::NonResident) => &[View::Bids],
        Some(Role::Resident) => &[View::InOut, View::Bids, View::Payment],
        Some(Role::Guard) => &[View::InOut],
        Some(Role::Manager) => &[
            View::InOut,
            View::Bids,
            View::Payment,
            View::Staff,
            View::Residents,
            View::Eviction,
            View::University,
            View::Dormitory,
            View::Room,
        ],
    };

    std::iter::once(View::Notifications)
        .chain(role_pages.iter().copied())
        .collect()
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, view: View);

    fn current(&self) -> View;
}

/// Keeps the current view and logs every transition.
pub struct TracingNavigator {
    current: ArcSwap<View>,
}

impl TracingNavigator {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(View::SignIn),
        }
    }
}

impl Default for TracingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for TracingNavigator {
    fn navigate(&self, view: View) {
        let previous = **self.current.load();
        if previous != view {
            tracing::info!(from = %previous, to = %view, "Navigating");
        }
        self.current.store(std::sync::Arc::new(view));
    }

    fn current(&self) -> View {
        **self.current.load()
    }
}
