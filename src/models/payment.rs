use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHistory {
    pub timestamp: NaiveDateTime,
    pub dormitory: String,
    pub room_number: i32,
    pub sum: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub debt: i32,
    pub room_cost: i32,
    pub last_payment_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub history: Vec<PaymentHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub sum: i32,
}
