use serde::{Deserialize, Serialize};

use super::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: i32,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub dormitory_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityRequest {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dormitory {
    pub id: i32,
    pub address: String,
    #[serde(default)]
    pub university_ids: Vec<i32>,
    #[serde(default)]
    pub resident_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DormitoryRequest {
    pub address: String,
    pub university_ids: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Block,
    Aisle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub dormitory_id: i32,
    pub number: i32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub capacity: i32,
    pub floor: i32,
    pub cost: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,
    pub dormitory_id: i32,
    pub number: i32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub capacity: i32,
    pub floor: i32,
    pub cost: i32,
    #[serde(default)]
    pub residents: Vec<User>,
}

impl Room {
    pub fn is_occupied(&self) -> bool {
        !self.residents.is_empty()
    }
}
