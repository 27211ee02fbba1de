use serde::{Deserialize, Serialize};

use crate::session::Role;

/// Envelope the API uses for single-value responses, e.g. `{"data": "<credential>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneField<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub surname: String,
    pub role: Role,
    pub university: Option<String>,
    pub dormitory: Option<String>,
    pub room_number: Option<i32>,
}
