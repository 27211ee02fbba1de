use reqwest::Method;
use serde_json::json;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::GuardHistory;

const API: &str = "guard";

/// Gate entry and exit logging.
#[derive(Clone)]
pub struct GuardRepository {
    api: ApiClient,
}

impl GuardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn entry(&self, login: &str) -> ClientResult<()> {
        self.record("entry", login).await
    }

    pub async fn exit(&self, login: &str) -> ClientResult<()> {
        self.record("exit", login).await
    }

    async fn record(&self, kind: &str, login: &str) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/{}", API, kind))
            .query(&[("login", login)])
            .json(&json!({}));
        self.api.send_unit(request).await
    }

    pub async fn history(&self, login: &str) -> ClientResult<Vec<GuardHistory>> {
        let request = self
            .api
            .request(Method::GET, &format!("{}/history", API))
            .query(&[("login", login)]);
        self.api.send_json(request).await
    }

    pub async fn self_history(&self) -> ClientResult<Vec<GuardHistory>> {
        let request = self
            .api
            .request(Method::GET, &format!("{}/history/self", API));
        self.api.send_json(request).await
    }
}
