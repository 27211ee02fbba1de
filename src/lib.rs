pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod repositories;
pub mod services;
pub mod session;

use std::sync::Arc;

use crate::api::{ApiClient, Notifier};
use crate::config::Config;
use crate::error::ClientResult;
use crate::guard::RouteGuard;
use crate::navigation::Navigator;
use crate::repositories::Repositories;
use crate::services::{AuthService, BuildingService, GateService};
use crate::session::{
    Clock, MemoryTokenStore, SessionBroadcaster, SessionEvaluator, SystemClock, TokenStore,
};

/// Everything a front end needs, wired around a single credential store.
#[derive(Clone)]
pub struct ClientState {
    pub config: Config,
    pub store: Arc<dyn TokenStore>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub evaluator: SessionEvaluator,
    pub broadcaster: Arc<SessionBroadcaster>,
    pub guard: Arc<RouteGuard>,
    pub api: ApiClient,
    pub repos: Repositories,
    pub auth: AuthService,
    pub buildings: BuildingService,
    pub gate: GateService,
}

pub fn create_client(
    config: Config,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
) -> ClientResult<ClientState> {
    create_client_with_clock(config, navigator, notifier, Arc::new(SystemClock))
}

pub fn create_client_with_clock(
    config: Config,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
) -> ClientResult<ClientState> {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let evaluator = SessionEvaluator::with_clock(store.clone(), clock);
    let broadcaster = Arc::new(SessionBroadcaster::new(
        store.clone(),
        evaluator.clone(),
        navigator.clone(),
    ));
    let guard = Arc::new(RouteGuard::new(evaluator.clone(), navigator.clone()));
    let api = ApiClient::new(&config, store.clone(), broadcaster.clone(), notifier.clone())?;
    let repos = Repositories::new(&api);

    let auth = AuthService::new(
        repos.auth.clone(),
        store.clone(),
        broadcaster.clone(),
        notifier.clone(),
    );
    let buildings = BuildingService::new(
        repos.universities.clone(),
        repos.dormitories.clone(),
        repos.rooms.clone(),
        notifier.clone(),
    );
    let gate = GateService::new(repos.guard.clone(), notifier.clone());

    Ok(ClientState {
        config,
        store,
        navigator,
        notifier,
        evaluator,
        broadcaster,
        guard,
        api,
        repos,
        auth,
        buildings,
        gate,
    })
}
