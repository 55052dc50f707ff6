//! Adapter implementations for order ports.

pub mod memory;

mod tracing_notifier;

pub use tracing_notifier::TracingNotifier;
