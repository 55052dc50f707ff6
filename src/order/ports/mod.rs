//! Port contracts for order management.
//!
//! Ports define infrastructure-agnostic interfaces used by order services.

pub mod notifier;
pub mod store;

pub use notifier::{Notification, Notifier, Severity};
pub use store::{OrderStore, OrderStoreError, OrderStoreResult, StoreSnapshot};
