use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::building::{Dormitory, University};
use crate::session::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: String,
    pub surname: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    #[serde(flatten)]
    pub user: User,
    pub university: University,
    pub dormitory: Dormitory,
    pub room_number: i32,
    pub debt: i32,
    pub last_came_out: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvictionReason {
    NonPayment,
    NonResidence,
    RuleViolation,
}

impl EvictionReason {
    pub fn description(&self) -> &'static str {
        match self {
            EvictionReason::NonPayment => "Overdue payment",
            EvictionReason::NonResidence => "Unauthorized absence",
            EvictionReason::RuleViolation => "Rule violation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eviction {
    pub resident: User,
    pub reason: EvictionReason,
}
