use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{Room, RoomRequest};

const API: &str = "room";

#[derive(Clone)]
pub struct RoomRepository {
    api: ApiClient,
}

impl RoomRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn all(&self) -> ClientResult<Vec<Room>> {
        self.api.send_json(self.api.request(Method::GET, API)).await
    }

    /// Rooms a resident may ask to move into.
    pub async fn available_for_resident(&self) -> ClientResult<Vec<Room>> {
        let request = self
            .api
            .request(Method::GET, &format!("{}/for-resident", API));
        self.api.send_json(request).await
    }

    pub async fn get(&self, id: i32) -> ClientResult<Room> {
        let request = self.api.request(Method::GET, &format!("{}/{}", API, id));
        self.api.send_json(request).await
    }

    pub async fn add(&self, req: &RoomRequest) -> ClientResult<()> {
        self.api
            .send_unit(self.api.request(Method::POST, API).json(req))
            .await
    }

    pub async fn delete(&self, id: i32) -> ClientResult<()> {
        let request = self.api.request(Method::DELETE, &format!("{}/{}", API, id));
        self.api.send_unit(request).await
    }
}
