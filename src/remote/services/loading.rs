//! In-flight call counter driving the loading indicator.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Counts remote calls that have started but not yet settled.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    /// Creates an idle indicator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a call as started; the call settles when the guard drops.
    #[must_use = "the call is considered settled as soon as the guard drops"]
    pub fn begin(&self) -> InFlightCall {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        InFlightCall {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// Returns the number of unsettled calls.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Returns `true` while any call is unsettled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }
}

/// Guard for one unsettled call.
#[derive(Debug)]
pub struct InFlightCall {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for InFlightCall {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
