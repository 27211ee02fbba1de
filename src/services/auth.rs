use std::sync::Arc;

use crate::api::Notifier;
use crate::error::ClientResult;
use crate::models::{LoginRequest, PasswordChangeRequest, Profile, RegisterRequest};
use crate::repositories::AuthRepository;
use crate::session::{SessionRefresh, TokenStore};

/// Owns every write to the credential store.
#[derive(Clone)]
pub struct AuthService {
    repo: AuthRepository,
    store: Arc<dyn TokenStore>,
    session: Arc<dyn SessionRefresh>,
    notifier: Arc<dyn Notifier>,
}

impl AuthService {
    pub fn new(
        repo: AuthRepository,
        store: Arc<dyn TokenStore>,
        session: Arc<dyn SessionRefresh>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            store,
            session,
            notifier,
        }
    }

    /// Signs in and returns the re-evaluated session state. A server that hands back an
    /// unusable credential yields `Ok(false)` with the store already purged.
    pub async fn login(&self, login: &str, password: &str) -> ClientResult<bool> {
        let req = LoginRequest {
            login: login.to_string(),
            password: password.to_string(),
        };
        match self.repo.login(&req).await {
            Ok(resp) => Ok(self.accept_credential(login, &resp.data)),
            Err(e) => {
                tracing::warn!(login, error = %e, "Login failed");
                self.logout();
                Err(e)
            }
        }
    }

    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<bool> {
        match self.repo.register(req).await {
            Ok(resp) => Ok(self.accept_credential(&req.login, &resp.data)),
            Err(e) => {
                tracing::warn!(login = %req.login, error = %e, "Registration failed");
                self.logout();
                Err(e)
            }
        }
    }

    fn accept_credential(&self, login: &str, credential: &str) -> bool {
        self.store.save(credential);
        let authorized = self.session.update_auth_state();
        if !authorized {
            tracing::warn!(login, "Server returned a credential that does not authorize");
        }
        authorized
    }

    pub fn logout(&self) {
        self.store.clear();
        self.session.update_auth_state();
    }

    pub async fn profile(&self) -> ClientResult<Profile> {
        self.repo.profile().await
    }

    /// Changes the password, then signs out so the user authenticates again.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> ClientResult<()> {
        let req = PasswordChangeRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.repo.change_password(&req).await?;
        self.logout();
        self.notifier
            .success("Password was changed", Some("Authorize, using new password"));
        Ok(())
    }

    pub async fn register_other(&self, req: &RegisterRequest) -> ClientResult<()> {
        self.repo.register_other(req).await
    }
}
