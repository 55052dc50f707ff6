//! Notification surface port.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual weight of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A mutation was confirmed.
    Success,
    /// Informational message.
    Info,
    /// The request was rejected locally and may be retried.
    Warning,
    /// An operation failed.
    Error,
}

/// Message handed to the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// Visual weight.
    pub severity: Severity,
    /// How long the message stays visible.
    pub duration: Duration,
}

/// Write-only sink for user notifications.
///
/// The core never reads notification state back.
pub trait Notifier: Send + Sync {
    /// Shows `notification` to the user.
    fn notify(&self, notification: Notification);
}
