//! Kanban board columns and drag-driven status transitions.

use super::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Drop target on the treatment board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KanbanColumn {
    /// Orders past their expected finish date.
    Overdue,
    /// Overdue orders being handled.
    InTreatment,
    /// Overdue orders whose handling is complete.
    Treated,
}

impl KanbanColumn {
    /// Board columns in display order.
    pub const ALL: [Self; 3] = [Self::Overdue, Self::InTreatment, Self::Treated];

    /// Returns the status a card takes when dropped on this column.
    #[must_use]
    pub const fn status(self) -> OrderStatus {
        match self {
            Self::Overdue => OrderStatus::Overdue,
            Self::InTreatment => OrderStatus::InTreatment,
            Self::Treated => OrderStatus::Treated,
        }
    }

    /// Returns the column showing orders with `status`, if any.
    #[must_use]
    pub const fn for_status(status: OrderStatus) -> Option<Self> {
        match status {
            OrderStatus::Overdue => Some(Self::Overdue),
            OrderStatus::InTreatment => Some(Self::InTreatment),
            OrderStatus::Treated => Some(Self::Treated),
            OrderStatus::Open
            | OrderStatus::Closed
            | OrderStatus::Suspended
            | OrderStatus::PendingInvalid => None,
        }
    }
}

/// Outcome of planning a drop onto a board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPlan {
    /// The card already sits in the target column; nothing to do.
    Unchanged,
    /// The order moves from its current status to the column status.
    Move {
        /// Status before the move.
        from: OrderStatus,
        /// Target column.
        to: KanbanColumn,
    },
}

impl Order {
    /// Plans moving this order onto `target`.
    ///
    /// Any status may move to any board column; only a drop onto the
    /// current status is a no-op.
    #[must_use]
    pub fn plan_transition(&self, target: KanbanColumn) -> TransitionPlan {
        let current = self.status();
        if KanbanColumn::for_status(current) == Some(target) {
            return TransitionPlan::Unchanged;
        }
        TransitionPlan::Move {
            from: current,
            to: target,
        }
    }
}
