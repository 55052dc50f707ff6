//! Three-column treatment board.

use crate::order::domain::{KanbanColumn, Order, OrderId};
use chrono::NaiveDate;
use serde::Serialize;

/// A status change sent to the server and not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingMove {
    /// Order being moved.
    pub order_id: OrderId,
    /// Column the card was dropped on.
    pub column: KanbanColumn,
}

/// One card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
    /// Stored record; its status is the confirmed one.
    pub order: Order,
    /// Whole days overdue.
    pub overdue_days: u32,
    /// `true` while the card sits in a column the server has not confirmed.
    pub pending: bool,
}

/// One board column with its cards in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanLane {
    /// Column identity.
    pub column: KanbanColumn,
    /// Cards shown in the column.
    pub cards: Vec<KanbanCard>,
}

/// Board view: three disjoint lanes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanBoard {
    /// Lanes in [`KanbanColumn::ALL`] order.
    pub lanes: Vec<KanbanLane>,
}

impl KanbanBoard {
    /// Groups `orders` into lanes.
    ///
    /// Orders whose confirmed status has no column are left off the board
    /// unless a pending move places them. A pending move shows its card in
    /// the target column, flagged as pending.
    #[must_use]
    pub fn build(orders: &[Order], pending: &[PendingMove], today: NaiveDate) -> Self {
        let mut lanes: Vec<KanbanLane> = KanbanColumn::ALL
            .iter()
            .map(|column| KanbanLane {
                column: *column,
                cards: Vec::new(),
            })
            .collect();

        for order in orders {
            let optimistic = pending
                .iter()
                .find(|pending_move| &pending_move.order_id == order.id())
                .map(|pending_move| pending_move.column);
            let Some(column) = optimistic.or_else(|| KanbanColumn::for_status(order.status()))
            else {
                continue;
            };
            if let Some(lane) = lanes.iter_mut().find(|lane| lane.column == column) {
                lane.cards.push(KanbanCard {
                    order: order.clone(),
                    overdue_days: order.overdue_days(today),
                    pending: optimistic.is_some(),
                });
            }
        }

        Self { lanes }
    }

    /// Returns the lane for `column`.
    #[must_use]
    pub fn lane(&self, column: KanbanColumn) -> Option<&KanbanLane> {
        self.lanes.iter().find(|lane| lane.column == column)
    }

    /// Returns the column currently showing `id`, if any.
    #[must_use]
    pub fn column_of(&self, id: &OrderId) -> Option<KanbanColumn> {
        self.lanes
            .iter()
            .find(|lane| lane.cards.iter().any(|card| card.order.id() == id))
            .map(|lane| lane.column)
    }

    /// Returns the number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.lanes.iter().map(|lane| lane.cards.len()).sum()
    }
}
