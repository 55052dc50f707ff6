//! HTTP transport backed by `reqwest`.

use crate::remote::{
    domain::{Endpoint, RemoteRequest, RemoteResponse},
    ports::{RemoteTransport, TransportError, TransportResult},
};
use async_trait::async_trait;
use std::time::Duration;

/// Content type accepted by the script endpoint without a CORS preflight.
const REQUEST_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts JSON envelopes to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpTransport {
    /// Creates a transport with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unreachable`] when the HTTP client cannot be
    /// built.
    pub fn new(endpoint: Endpoint) -> TransportResult<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Creates a transport with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unreachable`] when the HTTP client cannot be
    /// built.
    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Unreachable(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

fn map_send_error(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Unreachable(err.to_string())
    }
}

#[async_trait]
impl RemoteTransport for HttpTransport {
    async fn send(&self, request: &RemoteRequest) -> TransportResult<RemoteResponse> {
        let body =
            serde_json::to_string(request).map_err(|err| TransportError::Encode(err.to_string()))?;

        tracing::debug!(action = %request.action(), endpoint = %self.endpoint, "posting remote request");
        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(reqwest::header::CONTENT_TYPE, REQUEST_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|err| map_send_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let text = response.text().await.map_err(|err| map_send_error(&err))?;
        serde_json::from_str(&text).map_err(|err| TransportError::Decode(err.to_string()))
    }
}
