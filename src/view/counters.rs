//! Aggregate dashboard counters.

use crate::order::domain::{Order, OrderStatus};
use serde::Serialize;
use std::collections::HashSet;

/// Headline numbers shown above the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounters {
    /// Orders that are Open or Pending/Invalid.
    pub open_orders: usize,
    /// Orders that are Overdue.
    pub overdue_orders: usize,
    /// Orders keeping containers in use: not Closed and of pickup type.
    pub in_use_containers: usize,
    /// Distinct customer names.
    pub customers: usize,
}

impl DashboardCounters {
    /// Counts over every stored order.
    #[must_use]
    pub fn compute(orders: &[Order]) -> Self {
        let customers: HashSet<&str> = orders
            .iter()
            .filter_map(Order::customer)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            open_orders: orders
                .iter()
                .filter(|order| order.status().counts_as_open())
                .count(),
            overdue_orders: orders
                .iter()
                .filter(|order| order.status() == OrderStatus::Overdue)
                .count(),
            in_use_containers: orders.iter().filter(|order| order.holds_containers()).count(),
            customers: customers.len(),
        }
    }
}
