use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{University, UniversityRequest};

const API: &str = "university";

#[derive(Clone)]
pub struct UniversityRepository {
    api: ApiClient,
}

impl UniversityRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn all(&self) -> ClientResult<Vec<University>> {
        self.api.send_json(self.api.request(Method::GET, API)).await
    }

    pub async fn get(&self, id: i32) -> ClientResult<University> {
        let request = self.api.request(Method::GET, &format!("{}/{}", API, id));
        self.api.send_json(request).await
    }

    pub async fn add(&self, req: &UniversityRequest) -> ClientResult<()> {
        self.api
            .send_unit(self.api.request(Method::POST, API).json(req))
            .await
    }

    pub async fn update(&self, id: i32, req: &UniversityRequest) -> ClientResult<()> {
        let request = self
            .api
            .request(Method::PUT, &format!("{}/{}", API, id))
            .json(req);
        self.api.send_unit(request).await
    }

    pub async fn delete(&self, id: i32) -> ClientResult<()> {
        let request = self.api.request(Method::DELETE, &format!("{}/{}", API, id));
        self.api.send_unit(request).await
    }
}
