//! Record store port: the single source of truth for order records.

use crate::order::domain::{ContainerNumber, Order, OrderId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for record store operations.
pub type OrderStoreResult<T> = Result<T, OrderStoreError>;

/// Consistent copy of the store taken under one read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Orders in store order.
    pub orders: Vec<Order>,
    /// Containers registered without an order, in registration order.
    pub registered_containers: Vec<ContainerNumber>,
    /// Monotonic counter bumped by every commit.
    pub revision: u64,
}

/// Order record store contract.
///
/// Commits are synchronous and atomic: a reader either sees the state
/// before a commit or after it, never a partially updated record.
pub trait OrderStore: Send + Sync {
    /// Returns every order in store order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::Persistence`] when the store is unusable.
    fn all(&self) -> OrderStoreResult<Vec<Order>>;

    /// Finds an order by identifier.
    ///
    /// Returns `None` when the order does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::Persistence`] when the store is unusable.
    fn get(&self, id: &OrderId) -> OrderStoreResult<Option<Order>>;

    /// Inserts or overwrites an order, keeping its position when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::Persistence`] when the store is unusable.
    fn upsert(&self, order: Order) -> OrderStoreResult<()>;

    /// Removes an order, returning it when it existed.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::Persistence`] when the store is unusable.
    fn remove(&self, id: &OrderId) -> OrderStoreResult<Option<Order>>;

    /// Replaces every order wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::DuplicateOrder`] when `orders` repeats an
    /// identifier; the store is left untouched in that case.
    fn replace_all(&self, orders: Vec<Order>) -> OrderStoreResult<()>;

    /// Records a container confirmed by the system of record.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::Persistence`] when the store is unusable.
    fn register_container(&self, number: ContainerNumber) -> OrderStoreResult<()>;

    /// Returns orders, registered containers and revision from one read.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::Persistence`] when the store is unusable.
    fn snapshot(&self) -> OrderStoreResult<StoreSnapshot>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    /// A bulk replacement repeated an order identifier.
    #[error("duplicate order identifier: {0}")]
    DuplicateOrder(OrderId),

    /// Store-level failure.
    #[error("record store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OrderStoreError {
    /// Wraps a store-level error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
