use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::building::RoomType;
use super::user::User;
use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStatus {
    InProcess,
    PendingRevision,
    Accepted,
    Denied,
}

impl BidStatus {
    /// Only bids still under review may be edited by their sender.
    pub fn is_editable(&self) -> bool {
        matches!(self, BidStatus::InProcess | BidStatus::PendingRevision)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidType {
    Occupation,
    Departure,
    RoomChange,
    Eviction,
}

impl BidType {
    /// Path segment of the per-type create/edit endpoints.
    pub fn path(&self) -> &'static str {
        match self {
            BidType::Occupation => "occupation",
            BidType::Departure => "departure",
            BidType::RoomChange => "room-change",
            BidType::Eviction => "eviction",
        }
    }

    /// Bid types a role may open for itself.
    pub fn available_to(role: Role) -> &'static [BidType] {
        match role {
            Role::Resident => &[BidType::Eviction, BidType::Departure, BidType::RoomChange],
            Role::NonResident => &[BidType::Occupation],
            Role::Guard | Role::Manager => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub download_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub number: i64,
    pub sender: Option<User>,
    pub manager: Option<User>,
    pub text: String,
    pub comment: Option<String>,
    #[serde(rename = "type")]
    pub bid_type: BidType,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub status: BidStatus,
    // type-specific fields, present depending on `bid_type`
    pub university_id: Option<i32>,
    pub dormitory_id: Option<i32>,
    pub day_from: Option<NaiveDate>,
    pub day_to: Option<NaiveDate>,
    pub room_to_id: Option<i32>,
    pub room_prefer_type: Option<RoomType>,
}

/// Body of a bid create/edit request. The variant decides the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BidDraft {
    Occupation {
        text: String,
        attachment_keys: Vec<String>,
        university_id: i32,
        dormitory_id: i32,
    },
    Departure {
        text: String,
        attachment_keys: Vec<String>,
        day_from: NaiveDate,
        day_to: NaiveDate,
    },
    RoomChange {
        text: String,
        attachment_keys: Vec<String>,
        room_to_id: Option<i32>,
        room_prefer_type: Option<RoomType>,
    },
    Eviction {
        text: String,
        attachment_keys: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BidBody<'a> {
    text: &'a str,
    attachment_keys: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    university_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dormitory_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    day_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    day_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_to_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_prefer_type: Option<RoomType>,
}

impl BidDraft {
    pub fn bid_type(&self) -> BidType {
        match self {
            BidDraft::Occupation { .. } => BidType::Occupation,
            BidDraft::Departure { .. } => BidType::Departure,
            BidDraft::RoomChange { .. } => BidType::RoomChange,
            BidDraft::Eviction { .. } => BidType::Eviction,
        }
    }

    /// JSON body in the shape the per-type endpoint expects.
    pub fn to_body(&self) -> serde_json::Value {
        let (text, attachment_keys) = match self {
            BidDraft::Occupation { text, attachment_keys, .. }
            | BidDraft::Departure { text, attachment_keys, .. }
            | BidDraft::RoomChange { text, attachment_keys, .. }
            | BidDraft::Eviction { text, attachment_keys } => (text.as_str(), attachment_keys.as_slice()),
        };
        let mut body = BidBody {
            text,
            attachment_keys,
            university_id: None,
            dormitory_id: None,
            day_from: None,
            day_to: None,
            room_to_id: None,
            room_prefer_type: None,
        };
        match self {
            BidDraft::Occupation { university_id, dormitory_id, .. } => {
                body.university_id = Some(*university_id);
                body.dormitory_id = Some(*dormitory_id);
            }
            BidDraft::Departure { day_from, day_to, .. } => {
                body.day_from = Some(*day_from);
                body.day_to = Some(*day_to);
            }
            BidDraft::RoomChange { room_to_id, room_prefer_type, .. } => {
                body.room_to_id = *room_to_id;
                body.room_prefer_type = *room_prefer_type;
            }
            BidDraft::Eviction { .. } => {}
        }
        serde_json::to_value(body).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_editable_statuses() {
        assert!(BidStatus::InProcess.is_editable());
        assert!(BidStatus::PendingRevision.is_editable());
        assert!(!BidStatus::Accepted.is_editable());
        assert!(!BidStatus::Denied.is_editable());
    }

    #[test]
    fn test_available_bid_types() {
        assert_eq!(BidType::available_to(Role::NonResident), &[BidType::Occupation]);
        assert_eq!(BidType::available_to(Role::Resident).len(), 3);
        assert!(BidType::available_to(Role::Guard).is_empty());
    }

    #[test]
    fn test_departure_body() {
        let draft = BidDraft::Departure {
            text: "Going home".to_string(),
            attachment_keys: vec!["k1".to_string()],
            day_from: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            day_to: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        };
        assert_eq!(draft.bid_type(), BidType::Departure);
        assert_eq!(
            draft.to_body(),
            json!({
                "text": "Going home",
                "attachmentKeys": ["k1"],
                "dayFrom": "2024-06-01",
                "dayTo": "2024-06-10"
            })
        );
    }

    #[test]
    fn test_deserialize_bid() {
        let bid: Bid = serde_json::from_value(json!({
            "number": 7,
            "sender": {"login": "alice", "name": "Alice", "surname": "A", "role": "RESIDENT"},
            "manager": null,
            "text": "Please move me",
            "comment": null,
            "type": "ROOM_CHANGE",
            "attachments": [{"filename": "a.pdf", "downloadKey": "abc"}],
            "status": "PENDING_REVISION",
            "roomPreferType": "AISLE"
        }))
        .unwrap();

        assert_eq!(bid.bid_type, BidType::RoomChange);
        assert_eq!(bid.room_prefer_type, Some(RoomType::Aisle));
        assert_eq!(bid.attachments[0].download_key, "abc");
        assert!(bid.status.is_editable());
    }
}
