use reqwest::Method;
use serde_json::json;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{Bid, BidDraft, BidType};

const API: &str = "bid";

#[derive(Clone)]
pub struct BidRepository {
    api: ApiClient,
}

impl BidRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn list(&self, path: &str) -> ClientResult<Vec<Bid>> {
        let request = self.api.request(Method::GET, &format!("{}/{}", API, path));
        self.api.send_json(request).await
    }

    /// Bids sent by the signed-in user.
    pub async fn my(&self) -> ClientResult<Vec<Bid>> {
        self.list("my").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Bid> {
        let request = self.api.request(Method::GET, &format!("{}/{}", API, id));
        self.api.send_json(request).await
    }

    pub async fn in_process(&self) -> ClientResult<Vec<Bid>> {
        self.list("in-process").await
    }

    pub async fn pending(&self) -> ClientResult<Vec<Bid>> {
        self.list("pending").await
    }

    pub async fn archived(&self) -> ClientResult<Vec<Bid>> {
        self.list("archived").await
    }

    pub async fn create(&self, draft: &BidDraft) -> ClientResult<()> {
        let path = format!("{}/{}", API, draft.bid_type().path());
        let request = self.api.request(Method::POST, &path).json(&draft.to_body());
        self.api.send_unit(request).await
    }

    pub async fn edit(&self, id: i64, draft: &BidDraft) -> ClientResult<()> {
        let path = format!("{}/{}/{}", API, draft.bid_type().path(), id);
        let request = self.api.request(Method::PUT, &path).json(&draft.to_body());
        self.api.send_unit(request).await
    }

    pub async fn deny(&self, id: i64, comment: &str) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/{}/deny", API, id))
            .json(&json!({ "data": comment }));
        self.api.send_unit(request).await
    }

    pub async fn accept(&self, id: i64) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/{}/accept", API, id))
            .json(&json!({}));
        self.api.send_unit(request).await
    }

    /// Sends the bid back to its author for revision.
    pub async fn pend(&self, id: i64, comment: &str) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/{}/pend", API, id))
            .json(&json!({ "data": comment }));
        self.api.send_unit(request).await
    }

    /// Types of bids the signed-in user currently has open.
    pub async fn my_opened_types(&self) -> ClientResult<Vec<BidType>> {
        let request = self
            .api
            .request(Method::GET, &format!("{}/my/opened-types", API));
        self.api.send_json(request).await
    }
}
