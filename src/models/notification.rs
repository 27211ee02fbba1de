use serde::{Deserialize, Serialize};

/// Server-side notice about a bid, addressed to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidNotice {
    pub id: i64,
    pub bid_id: i64,
    pub text: String,
}
