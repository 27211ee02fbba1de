use reqwest::Method;
use serde_json::json;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::BidNotice;

const API: &str = "notification";

#[derive(Clone)]
pub struct NotificationRepository {
    api: ApiClient,
}

impl NotificationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn unread(&self) -> ClientResult<Vec<BidNotice>> {
        let request = self.api.request(Method::GET, &format!("{}/unread", API));
        self.api.send_json(request).await
    }

    pub async fn mark_as_read(&self, id: i64) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/mark-as-read", API))
            .query(&[("id", id)])
            .json(&json!({}));
        self.api.send_unit(request).await
    }

    pub async fn mark_all_as_read(&self) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/mark-all-as-read", API))
            .json(&json!({}));
        self.api.send_unit(request).await
    }
}
