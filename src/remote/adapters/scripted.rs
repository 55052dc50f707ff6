//! Scripted transport for tests and offline demos.

use crate::remote::{
    domain::{RemoteRequest, RemoteResponse},
    ports::{RemoteTransport, TransportError, TransportResult},
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::watch;

/// Transport that replays queued outcomes in order and records requests.
///
/// The transport can be held closed so that calls park until
/// [`ScriptedTransport::release`] is called, which lets callers observe
/// state while a request is in flight.
#[derive(Debug, Clone)]
pub struct ScriptedTransport {
    state: Arc<Mutex<ScriptState>>,
    gate: Arc<watch::Sender<bool>>,
    waiting: Arc<AtomicUsize>,
}

#[derive(Debug, Default)]
struct ScriptState {
    outcomes: VecDeque<TransportResult<RemoteResponse>>,
    requests: Vec<RemoteRequest>,
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedTransport {
    /// Creates an open transport with an empty script.
    #[must_use]
    pub fn new() -> Self {
        let (gate, _) = watch::channel(true);
        Self {
            state: Arc::new(Mutex::new(ScriptState::default())),
            gate: Arc::new(gate),
            waiting: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queues a structured response.
    pub fn push_response(&self, response: RemoteResponse) {
        self.push(Ok(response));
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.push(Err(error));
    }

    /// Queues the same response `count` times.
    pub fn push_repeated(&self, response: &RemoteResponse, count: usize) {
        for _ in 0..count {
            self.push(Ok(response.clone()));
        }
    }

    fn push(&self, outcome: TransportResult<RemoteResponse>) {
        if let Ok(mut state) = self.state.lock() {
            state.outcomes.push_back(outcome);
        }
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.state
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    /// Returns how many requests were received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.lock().map(|state| state.requests.len()).unwrap_or(0)
    }

    /// Returns how many queued outcomes remain.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state
            .lock()
            .map(|state| state.outcomes.len())
            .unwrap_or(0)
    }

    /// Parks subsequent calls until [`ScriptedTransport::release`].
    pub fn hold(&self) {
        self.gate.send_replace(false);
    }

    /// Lets parked and future calls proceed.
    pub fn release(&self) {
        self.gate.send_replace(true);
    }

    /// Returns how many calls are parked behind the gate.
    #[must_use]
    pub fn parked(&self) -> usize {
        self.waiting.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteTransport for ScriptedTransport {
    async fn send(&self, request: &RemoteRequest) -> TransportResult<RemoteResponse> {
        if let Ok(mut state) = self.state.lock() {
            state.requests.push(request.clone());
        }

        let mut gate = self.gate.subscribe();
        if !*gate.borrow() {
            self.waiting.fetch_add(1, Ordering::SeqCst);
            let opened = gate.wait_for(|open| *open).await.is_ok();
            self.waiting.fetch_sub(1, Ordering::SeqCst);
            if !opened {
                return Err(TransportError::Unreachable("transport gate dropped".to_owned()));
            }
        }

        let next = self
            .state
            .lock()
            .map_err(|err| TransportError::Unreachable(err.to_string()))?
            .outcomes
            .pop_front();
        next.unwrap_or_else(|| {
            Err(TransportError::Unreachable(format!(
                "no scripted outcome for {}",
                request.action()
            )))
        })
    }
}
