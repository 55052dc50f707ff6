//! Container inventory derived from order records.

use crate::order::domain::{ContainerNumber, Order, OrderStatus};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// Container referenced by an order that still holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InUseContainer {
    /// Container number.
    pub number: ContainerNumber,
    /// Document of the holding order.
    pub document_number: Option<String>,
    /// Creation date of the holding order.
    pub created_on: Option<NaiveDate>,
    /// Customer of the holding order.
    pub customer: Option<String>,
}

/// Container not held by any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableContainer {
    /// Container number.
    pub number: ContainerNumber,
    /// Finish date of the most recent closed order using it.
    pub last_finished_on: Option<NaiveDate>,
    /// Document of that order.
    pub last_document_number: Option<String>,
}

/// Availability of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerAvailability {
    /// Held by a non-closed pickup order.
    InUse,
    /// Free to rent.
    Available,
}

/// In-use and available containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInventory {
    /// Containers in use, in first-seen order.
    pub in_use: Vec<InUseContainer>,
    /// Available containers, in first-seen order.
    pub available: Vec<AvailableContainer>,
}

impl ContainerInventory {
    /// Derives the inventory from `orders` and standalone `registered`
    /// containers.
    ///
    /// Container numbers are de-duplicated. A container is in use when any
    /// order holding containers references it; otherwise it is available
    /// with the history of its most recent closed order, if any.
    #[must_use]
    pub fn compute(orders: &[Order], registered: &[ContainerNumber]) -> Self {
        let mut holders: IndexMap<&ContainerNumber, &Order> = IndexMap::new();
        let mut last_closed: IndexMap<&ContainerNumber, Option<&Order>> = IndexMap::new();

        for order in orders {
            for number in order.containers() {
                if order.holds_containers() {
                    holders.entry(number).or_insert(order);
                }
                let slot = last_closed.entry(number).or_insert(None);
                if order.status() == OrderStatus::Closed && is_more_recent(order, *slot) {
                    *slot = Some(order);
                }
            }
        }
        for number in registered {
            last_closed.entry(number).or_insert(None);
        }

        let in_use = holders
            .iter()
            .map(|(number, order)| InUseContainer {
                number: (*number).clone(),
                document_number: order.document_number().map(str::to_owned),
                created_on: order.created_on(),
                customer: order.customer().map(str::to_owned),
            })
            .collect();
        let available = last_closed
            .iter()
            .filter(|(number, _)| !holders.contains_key(*number))
            .map(|(number, closed)| AvailableContainer {
                number: (*number).clone(),
                last_finished_on: closed.and_then(Order::finished_on),
                last_document_number: closed
                    .and_then(Order::document_number)
                    .map(str::to_owned),
            })
            .collect();

        Self { in_use, available }
    }

    /// Returns the number of distinct containers.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.in_use.len().saturating_add(self.available.len())
    }

    /// Returns the availability of `number`, if known.
    #[must_use]
    pub fn availability(&self, number: &ContainerNumber) -> Option<ContainerAvailability> {
        if self.in_use.iter().any(|row| &row.number == number) {
            Some(ContainerAvailability::InUse)
        } else if self.available.iter().any(|row| &row.number == number) {
            Some(ContainerAvailability::Available)
        } else {
            None
        }
    }
}

fn is_more_recent(candidate: &Order, current: Option<&Order>) -> bool {
    current.is_none_or(|existing| candidate.finished_on() >= existing.finished_on())
}
