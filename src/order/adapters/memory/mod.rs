//! In-memory adapters for the order ports.

mod notifier;
mod store;

pub use notifier::RecordingNotifier;
pub use store::InMemoryOrderStore;
