//! Notification dispatcher seam.
//!
//! The core never talks to a desktop notification daemon directly; it calls
//! through this trait exactly once per completion event. The CLI provides a
//! notify-rust implementation, tests count invocations.

/// Fire-and-forget notification dispatch.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, icon: &str);
}

/// Notifier that drops everything. Used when notifications are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _message: &str, _icon: &str) {}
}
