//! Notification adapter that forwards messages to `tracing`.

use crate::order::ports::{Notification, Notifier, Severity};

/// Notifier that emits each notification as a `tracing` event.
///
/// Useful for hosts without a visual notification surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let duration_ms = u64::try_from(notification.duration.as_millis()).unwrap_or(u64::MAX);
        match notification.severity {
            Severity::Error => {
                tracing::error!(duration_ms, message = %notification.message, "notification");
            }
            Severity::Warning => {
                tracing::warn!(duration_ms, message = %notification.message, "notification");
            }
            Severity::Success | Severity::Info => {
                tracing::info!(
                    duration_ms,
                    severity = ?notification.severity,
                    message = %notification.message,
                    "notification"
                );
            }
        }
    }
}
