pub mod client;
pub mod notify;

pub use client::ApiClient;
pub use notify::{MemoryNotifier, Notification, Notifier, Severity, TracingNotifier};
