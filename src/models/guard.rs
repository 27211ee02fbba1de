use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassageType {
    In,
    Out,
}

/// One gate passage of a resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardHistory {
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type")]
    pub passage: PassageType,
}
