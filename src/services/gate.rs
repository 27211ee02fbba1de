use std::sync::Arc;

use crate::api::Notifier;
use crate::error::ClientResult;
use crate::repositories::GuardRepository;

/// Guard-post actions. A blank login is ignored without contacting the server.
#[derive(Clone)]
pub struct GateService {
    repo: GuardRepository,
    notifier: Arc<dyn Notifier>,
}

impl GateService {
    pub fn new(repo: GuardRepository, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, notifier }
    }

    /// Returns whether anything was recorded.
    pub async fn entry(&self, login: &str) -> ClientResult<bool> {
        let login = login.trim();
        if login.is_empty() {
            return Ok(false);
        }
        self.repo.entry(login).await?;
        self.notifier.success("Entry was successfully registered", None);
        Ok(true)
    }

    pub async fn exit(&self, login: &str) -> ClientResult<bool> {
        let login = login.trim();
        if login.is_empty() {
            return Ok(false);
        }
        self.repo.exit(login).await?;
        self.notifier.success("Exit was successfully registered", None);
        Ok(true)
    }
}
