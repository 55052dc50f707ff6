//! Resilient remote client with rate-limit backoff.

use super::LoadingIndicator;
use crate::remote::{
    adapters::TokioSleeper,
    domain::{RemoteError, RemoteRequest, RemoteResponse, ResponseStatus, RetryPolicy},
    ports::{RemoteTransport, Sleeper, TransportError},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Result type for client calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Sends requests through a transport, retrying rate-limited responses.
///
/// Only `too_many_requests` responses are retried. Transport failures and
/// rejected actions are returned on the first occurrence.
#[derive(Clone)]
pub struct ResilientClient {
    transport: Arc<dyn RemoteTransport>,
    sleeper: Arc<dyn Sleeper>,
    policy: RetryPolicy,
    loading: LoadingIndicator,
}

impl std::fmt::Debug for ResilientClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientClient")
            .field("policy", &self.policy)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl ResilientClient {
    /// Creates a client sleeping on the tokio timer.
    #[must_use]
    pub fn new(transport: Arc<dyn RemoteTransport>, policy: RetryPolicy) -> Self {
        Self::with_sleeper(transport, Arc::new(TokioSleeper), policy)
    }

    /// Creates a client with an explicit sleeper.
    #[must_use]
    pub fn with_sleeper(
        transport: Arc<dyn RemoteTransport>,
        sleeper: Arc<dyn Sleeper>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            sleeper,
            policy,
            loading: LoadingIndicator::new(),
        }
    }

    /// Shares an existing loading indicator with this client.
    #[must_use]
    pub fn with_loading(mut self, loading: LoadingIndicator) -> Self {
        self.loading = loading;
        self
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Returns the loading indicator.
    #[must_use]
    pub const fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    /// Sends `request` and returns the payload of the success response.
    ///
    /// # Errors
    ///
    /// - [`RemoteError::Network`] on the first transport failure.
    /// - [`RemoteError::RateLimited`] once the retry budget is spent.
    /// - [`RemoteError::OperationFailed`] for any other non-success status.
    pub async fn call(&self, request: &RemoteRequest) -> RemoteResult<Option<serde_json::Value>> {
        let _in_flight = self.loading.begin();
        let action = request.action();
        let mut retries: u32 = 0;

        loop {
            tracing::debug!(%action, attempt = retries.saturating_add(1), "sending remote request");
            let response = self
                .transport
                .send(request)
                .await
                .map_err(|err| network_error(&err))?;

            match response.outcome() {
                ResponseStatus::Success => return Ok(response.into_data()),
                ResponseStatus::Failed => return Err(rejected(&response)),
                ResponseStatus::TooManyRequests => {}
            }

            if retries >= self.policy.max_retries {
                let attempts = retries.saturating_add(1);
                tracing::warn!(%action, attempts, "rate limit budget exhausted");
                return Err(RemoteError::RateLimited { attempts });
            }

            let delay = self.policy.delay_for(retries);
            tracing::warn!(
                %action,
                retry = retries.saturating_add(1),
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "rate limited; backing off"
            );
            self.sleeper.sleep(delay).await;
            retries = retries.saturating_add(1);
        }
    }

    /// Sends `request` and decodes the success payload into `D`.
    ///
    /// A missing payload decodes as JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ResilientClient::call`], plus
    /// [`RemoteError::InvalidPayload`] when the payload does not decode.
    pub async fn call_decoded<D: DeserializeOwned>(&self, request: &RemoteRequest) -> RemoteResult<D> {
        let payload = self.call(request).await?.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(payload).map_err(|err| {
            tracing::warn!(action = %request.action(), error = %err, "undecodable response payload");
            RemoteError::InvalidPayload(err.to_string())
        })
    }
}

fn network_error(err: &TransportError) -> RemoteError {
    tracing::warn!(error = %err, "remote transport failed");
    RemoteError::Network(err.to_string())
}

fn rejected(response: &RemoteResponse) -> RemoteError {
    tracing::warn!(status = response.status(), message = ?response.message(), "remote action rejected");
    RemoteError::OperationFailed {
        message: response.message().map(str::to_owned),
    }
}
