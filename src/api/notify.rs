use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// A single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: Option<String>,
}

impl Notification {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail,
        }
    }
}

/// Sink for user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, summary: &str, detail: Option<&str>) {
        self.notify(Notification::new(Severity::Success, summary, detail.map(str::to_string)));
    }

    fn info(&self, summary: &str, detail: Option<&str>) {
        self.notify(Notification::new(Severity::Info, summary, detail.map(str::to_string)));
    }

    fn warn(&self, summary: &str, detail: Option<&str>) {
        self.notify(Notification::new(Severity::Warn, summary, detail.map(str::to_string)));
    }

    fn error(&self, summary: &str, detail: Option<&str>) {
        self.notify(Notification::new(Severity::Error, summary, detail.map(str::to_string)));
    }
}

/// Writes every notification to the log at a level matching its severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: Notification) {
        let detail = n.detail.as_deref().unwrap_or("");
        match n.severity {
            Severity::Success | Severity::Info => {
                tracing::info!(severity = %n.severity, detail, "{}", n.summary)
            }
            Severity::Warn => tracing::warn!(severity = %n.severity, detail, "{}", n.summary),
            Severity::Error => tracing::error!(severity = %n.severity, detail, "{}", n.summary),
        }
    }
}

/// Collects notifications so they can be shown later or inspected.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    received: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.received.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}
