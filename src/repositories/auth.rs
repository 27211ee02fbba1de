use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{LoginRequest, OneField, PasswordChangeRequest, Profile, RegisterRequest};

const API: &str = "auth";

#[derive(Clone)]
pub struct AuthRepository {
    api: ApiClient,
}

impl AuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Creates an account for the caller and returns its credential.
    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<OneField<String>> {
        let request = self.api.request(Method::POST, &format!("{}/register", API)).json(req);
        self.api.send_json(request).await
    }

    pub async fn login(&self, req: &LoginRequest) -> ClientResult<OneField<String>> {
        let request = self.api.request(Method::POST, &format!("{}/login", API)).json(req);
        self.api.send_json(request).await
    }

    /// Creates an account on someone else's behalf. Manager only.
    pub async fn register_other(&self, req: &RegisterRequest) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/register-other", API))
            .json(req);
        self.api.send_unit(request).await
    }

    pub async fn change_password(&self, req: &PasswordChangeRequest) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/change-password", API))
            .json(req);
        self.api.send_unit(request).await
    }

    pub async fn profile(&self) -> ClientResult<Profile> {
        let request = self.api.request(Method::GET, &format!("{}/profile", API));
        self.api.send_json(request).await
    }
}
