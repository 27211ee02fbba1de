//! One repository per API resource. Each is a thin typed wrapper over [`ApiClient`].
//!
//! [`ApiClient`]: crate::api::ApiClient

pub mod auth;
pub mod bid;
pub mod dormitory;
pub mod file;
pub mod guard;
pub mod notification;
pub mod payment;
pub mod room;
pub mod university;
pub mod user;

pub use auth::AuthRepository;
pub use bid::BidRepository;
pub use dormitory::DormitoryRepository;
pub use file::FileRepository;
pub use guard::GuardRepository;
pub use notification::NotificationRepository;
pub use payment::PaymentRepository;
pub use room::RoomRepository;
pub use university::UniversityRepository;
pub use user::UserRepository;

use crate::api::ApiClient;

/// Every repository, sharing one [`ApiClient`].
#[derive(Clone)]
pub struct Repositories {
    pub auth: AuthRepository,
    pub bids: BidRepository,
    pub dormitories: DormitoryRepository,
    pub files: FileRepository,
    pub guard: GuardRepository,
    pub notifications: NotificationRepository,
    pub payments: PaymentRepository,
    pub rooms: RoomRepository,
    pub universities: UniversityRepository,
    pub users: UserRepository,
}

impl Repositories {
    pub fn new(api: &ApiClient) -> Self {
        Self {
            auth: AuthRepository::new(api.clone()),
            bids: BidRepository::new(api.clone()),
            dormitories: DormitoryRepository::new(api.clone()),
            files: FileRepository::new(api.base_url()),
            guard: GuardRepository::new(api.clone()),
            notifications: NotificationRepository::new(api.clone()),
            payments: PaymentRepository::new(api.clone()),
            rooms: RoomRepository::new(api.clone()),
            universities: UniversityRepository::new(api.clone()),
            users: UserRepository::new(api.clone()),
        }
    }
}
