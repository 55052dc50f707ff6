//! Client configuration values.

use super::EndpointError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Exponential backoff settings for rate-limited calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay_ms: 1_000,
            max_retries: 5,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with explicit values.
    #[must_use]
    pub const fn new(base_delay_ms: u64, max_retries: u32) -> Self {
        Self {
            base_delay_ms,
            max_retries,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub const fn no_retries() -> Self {
        Self::new(0, 0)
    }

    /// Returns the delay before retry number `retry` (zero based).
    ///
    /// The delay is `base_delay_ms * 2^retry`, saturating on overflow.
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2_u64.checked_pow(retry).unwrap_or(u64::MAX);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Returns the total number of requests the policy allows.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Validated HTTP endpoint of the remote system of record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint(String);

impl Endpoint {
    /// Validates and wraps `url`.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError`] when the URL is blank or not `http(s)`.
    pub fn new(url: impl Into<String>) -> Result<Self, EndpointError> {
        let raw = url.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }
        let lowered = trimmed.to_ascii_lowercase();
        if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
            return Err(EndpointError::UnsupportedScheme(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Endpoint {
    type Error = EndpointError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Endpoint> for String {
    fn from(value: Endpoint) -> Self {
        value.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
