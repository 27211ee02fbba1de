//! Request and response bodies of the residence API.

pub mod auth;
pub mod bid;
pub mod building;
pub mod guard;
pub mod notification;
pub mod payment;
pub mod user;

pub use auth::{LoginRequest, OneField, PasswordChangeRequest, Profile, RegisterRequest};
pub use bid::{Attachment, Bid, BidDraft, BidStatus, BidType};
pub use building::{Dormitory, DormitoryRequest, Room, RoomRequest, RoomType, University, UniversityRequest};
pub use guard::{GuardHistory, PassageType};
pub use notification::BidNotice;
pub use payment::{PaymentHistory, PaymentInfo, PaymentRequest};
pub use user::{Eviction, EvictionReason, Resident, User};
