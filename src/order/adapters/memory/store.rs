//! In-memory record store.

use indexmap::{IndexMap, IndexSet};
use std::sync::{Arc, RwLock};

use crate::order::{
    domain::{ContainerNumber, Order, OrderId},
    ports::{OrderStore, OrderStoreError, OrderStoreResult, StoreSnapshot},
};

/// Thread-safe in-memory order store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<RwLock<InMemoryOrderState>>,
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    orders: IndexMap<OrderId, Order>,
    registered_containers: IndexSet<ContainerNumber>,
    revision: u64,
}

impl InMemoryOrderState {
    const fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl InMemoryOrderStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `orders`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::DuplicateOrder`] when `orders` repeats an
    /// identifier.
    pub fn with_orders(orders: Vec<Order>) -> OrderStoreResult<Self> {
        let store = Self::new();
        store.replace_all(orders)?;
        Ok(store)
    }

    fn read(&self) -> OrderStoreResult<std::sync::RwLockReadGuard<'_, InMemoryOrderState>> {
        self.state
            .read()
            .map_err(|err| OrderStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> OrderStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryOrderState>> {
        self.state
            .write()
            .map_err(|err| OrderStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

impl OrderStore for InMemoryOrderStore {
    fn all(&self) -> OrderStoreResult<Vec<Order>> {
        let state = self.read()?;
        Ok(state.orders.values().cloned().collect())
    }

    fn get(&self, id: &OrderId) -> OrderStoreResult<Option<Order>> {
        let state = self.read()?;
        Ok(state.orders.get(id).cloned())
    }

    fn upsert(&self, order: Order) -> OrderStoreResult<()> {
        let mut state = self.write()?;
        state.orders.insert(order.id().clone(), order);
        state.bump();
        Ok(())
    }

    fn remove(&self, id: &OrderId) -> OrderStoreResult<Option<Order>> {
        let mut state = self.write()?;
        let removed = state.orders.shift_remove(id);
        if removed.is_some() {
            state.bump();
        }
        Ok(removed)
    }

    fn replace_all(&self, orders: Vec<Order>) -> OrderStoreResult<()> {
        let mut replacement = IndexMap::with_capacity(orders.len());
        for order in orders {
            let id = order.id().clone();
            if replacement.contains_key(&id) {
                return Err(OrderStoreError::DuplicateOrder(id));
            }
            replacement.insert(id, order);
        }

        let mut state = self.write()?;
        state.orders = replacement;
        state.bump();
        Ok(())
    }

    fn register_container(&self, number: ContainerNumber) -> OrderStoreResult<()> {
        let mut state = self.write()?;
        if state.registered_containers.insert(number) {
            state.bump();
        }
        Ok(())
    }

    fn snapshot(&self) -> OrderStoreResult<StoreSnapshot> {
        let state = self.read()?;
        Ok(StoreSnapshot {
            orders: state.orders.values().cloned().collect(),
            registered_containers: state.registered_containers.iter().cloned().collect(),
            revision: state.revision,
        })
    }
}
