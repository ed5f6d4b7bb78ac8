use limber_core::Notifier;
use tracing::warn;

/// Desktop notification dispatch via the platform notification daemon.
///
/// Fire-and-forget: a failed dispatch is logged and dropped, never
/// surfaced to the tick that triggered it.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str, icon: &str) {
        let mut notification = notify_rust::Notification::new();
        notification.summary(title).body(message);
        if !icon.is_empty() {
            notification.icon(icon);
        }
        if let Err(e) = notification.show() {
            warn!(error = %e, "notification dispatch failed");
        }
    }
}
