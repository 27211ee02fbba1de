pub mod auth;
pub mod building;
pub mod gate;

pub use auth::AuthService;
pub use building::BuildingService;
pub use gate::GateService;
