use reqwest::Method;
use serde_json::json;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{Eviction, Resident, User};

const API: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    api: ApiClient,
}

impl UserRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn staff(&self) -> ClientResult<Vec<User>> {
        let request = self.api.request(Method::GET, &format!("{}/staff", API));
        self.api.send_json(request).await
    }

    pub async fn residents(&self) -> ClientResult<Vec<Resident>> {
        let request = self.api.request(Method::GET, &format!("{}/residents", API));
        self.api.send_json(request).await
    }

    pub async fn fire(&self, login: &str) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::DELETE, &format!("{}/fire", API))
            .query(&[("login", login)]);
        self.api.send_unit(request).await
    }

    /// Residents that currently qualify for eviction, with the reason.
    pub async fn evictions(&self) -> ClientResult<Vec<Eviction>> {
        let request = self
            .api
            .request(Method::GET, &format!("{}/residents/to-eviction", API));
        self.api.send_json(request).await
    }

    pub async fn evict(&self, login: &str) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/residents/evict", API))
            .query(&[("login", login)])
            .json(&json!({}));
        self.api.send_unit(request).await
    }
}
