//! Transport port: one request out, one structured response back.

use crate::remote::domain::{RemoteRequest, RemoteResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Carries a request to the remote system of record.
///
/// Implementations perform exactly one exchange per call and never retry;
/// retry policy belongs to the client.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    /// Sends `request` and returns the decoded response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no structured response was obtained.
    async fn send(&self, request: &RemoteRequest) -> TransportResult<RemoteResponse>;
}

/// Failures before a structured response is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint could not be reached.
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),

    /// The exchange did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// The endpoint answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The request could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// The response body was not a response envelope.
    #[error("response decoding failed: {0}")]
    Decode(String),
}
