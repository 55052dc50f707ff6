//! Error types for the remote client.

use thiserror::Error;

/// Failures surfaced by the resilient client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The endpoint could not be reached or the exchange failed in transit.
    #[error("network error: {0}")]
    Network(String),

    /// The server kept rate-limiting past the retry budget.
    #[error("rate limited after {attempts} attempts")]
    RateLimited {
        /// Number of requests sent before giving up.
        attempts: u32,
    },

    /// The server rejected the action.
    #[error("operation failed: {}", message.as_deref().unwrap_or("no message from server"))]
    OperationFailed {
        /// Message returned by the server, when present.
        message: Option<String>,
    },

    /// A success response carried a payload of the wrong shape.
    #[error("invalid response payload: {0}")]
    InvalidPayload(String),
}

impl RemoteError {
    /// Returns the server-provided message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::OperationFailed { message } => message.as_deref(),
            Self::Network(_) | Self::RateLimited { .. } | Self::InvalidPayload(_) => None,
        }
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown remote action: {0}")]
pub struct ParseRemoteActionError(pub String);

/// Error returned when an endpoint URL is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// The URL was blank.
    #[error("endpoint URL must not be empty")]
    Empty,

    /// The URL did not use `http` or `https`.
    #[error("endpoint URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}
