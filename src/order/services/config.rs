//! Desk configuration.

use crate::remote::domain::RetryPolicy;
use crate::view::ViewConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notification display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a notification stays visible, in milliseconds.
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 5_000 }
    }
}

impl NotificationConfig {
    /// Returns the display duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Complete desk configuration, loadable from any serde format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// View derivation settings.
    pub view: ViewConfig,
    /// Notification settings.
    pub notification: NotificationConfig,
    /// Rate-limit backoff settings.
    pub retry: RetryPolicy,
}
