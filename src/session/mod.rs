//! Client-side session lifecycle: credential storage, evaluation and broadcast.

pub mod broadcaster;
pub mod credential;
pub mod evaluator;
pub mod store;

pub use broadcaster::{SessionBroadcaster, SessionRefresh};
pub use credential::{Claims, Role};
pub use evaluator::{Clock, SessionEvaluator, SystemClock};
#[cfg(test)]
pub(crate) use evaluator::FixedClock;
pub use store::{MemoryTokenStore, TokenStore};
