use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{PaymentInfo, PaymentRequest};

const API: &str = "payment";

#[derive(Clone)]
pub struct PaymentRepository {
    api: ApiClient,
}

impl PaymentRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn self_info(&self) -> ClientResult<PaymentInfo> {
        let request = self.api.request(Method::GET, &format!("{}/info/self", API));
        self.api.send_json(request).await
    }

    pub async fn info(&self, login: &str) -> ClientResult<PaymentInfo> {
        let request = self
            .api
            .request(Method::GET, &format!("{}/info", API))
            .query(&[("login", login)]);
        self.api.send_json(request).await
    }

    /// Pays off the debt. The server rejects any sum other than the full debt.
    pub async fn pay(&self, sum: i32) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/pay", API))
            .json(&PaymentRequest { sum });
        self.api.send_unit(request).await
    }
}
