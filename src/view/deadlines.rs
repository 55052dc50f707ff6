//! Upcoming-deadline alerts for open orders.

use crate::order::domain::{Order, OrderStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Open order whose expected finish date is close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineAlert {
    /// Order due soon.
    pub order: Order,
    /// Days until the expected finish date; 0 means today.
    pub days_remaining: u32,
}

/// Returns open orders due within `horizon_days` of `today`, soonest first.
#[must_use]
pub fn upcoming_deadlines(orders: &[Order], today: NaiveDate, horizon_days: u32) -> Vec<DeadlineAlert> {
    let mut alerts: Vec<DeadlineAlert> = orders
        .iter()
        .filter(|order| order.status() == OrderStatus::Open)
        .filter_map(|order| {
            let remaining = order.days_until_expected_finish(today)?;
            let days_remaining = u32::try_from(remaining).ok()?;
            (days_remaining <= horizon_days).then(|| DeadlineAlert {
                order: order.clone(),
                days_remaining,
            })
        })
        .collect();
    alerts.sort_by_key(|alert| alert.days_remaining);
    alerts
}
