//! Complete view-model handed to the presentation surface.

use super::{
    ContainerInventory, DashboardCounters, DeadlineAlert, KanbanBoard, PendingMove, TablePage,
    ViewConfig, ViewState, compute_view, upcoming_deadlines,
};
use crate::order::domain::{ContainerNumber, Order};
use chrono::NaiveDate;
use serde::Serialize;

/// Inputs of one derivation pass.
#[derive(Debug, Clone, Copy)]
pub struct DerivationInput<'a> {
    /// Orders in store order.
    pub orders: &'a [Order],
    /// Containers registered without an order.
    pub registered_containers: &'a [ContainerNumber],
    /// Unconfirmed board moves.
    pub pending_moves: &'a [PendingMove],
    /// Table state.
    pub state: &'a ViewState,
    /// Derivation settings.
    pub config: &'a ViewConfig,
    /// Calendar date used for overdue and deadline maths.
    pub today: NaiveDate,
}

/// Every derived view, computed from one store snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Filtered, sorted, paginated table.
    pub table: TablePage,
    /// Treatment board.
    pub board: KanbanBoard,
    /// Headline counters.
    pub counters: DashboardCounters,
    /// Container inventory.
    pub inventory: ContainerInventory,
    /// Open orders due soon.
    pub deadlines: Vec<DeadlineAlert>,
    /// Store revision the view was derived from.
    pub revision: u64,
}

impl DashboardView {
    /// Derives every view from `input`.
    #[must_use]
    pub fn derive(input: DerivationInput<'_>, revision: u64) -> Self {
        Self {
            table: compute_view(input.orders, input.state, input.config, input.today),
            board: KanbanBoard::build(input.orders, input.pending_moves, input.today),
            counters: DashboardCounters::compute(input.orders),
            inventory: ContainerInventory::compute(input.orders, input.registered_containers),
            deadlines: upcoming_deadlines(
                input.orders,
                input.today,
                input.config.deadline_horizon_days,
            ),
            revision,
        }
    }
}
