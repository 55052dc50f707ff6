//! Drag-driven status transitions on the treatment board.

use super::{
    DeskResult, OrderDesk,
    mutations::{display_name, ensure_same_record},
    requests,
};
use crate::order::{
    domain::{KanbanColumn, Order, OrderId, TransitionPlan},
    ports::{Notifier, OrderStore, Severity},
};
use mockable::Clock;

/// Result of dropping a card on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The card was dropped on its own column; nothing was sent.
    Unchanged,
    /// The server confirmed the move; carries the stored record.
    Moved(Order),
}

impl<S, N, C> OrderDesk<S, N, C>
where
    S: OrderStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Moves order `id` to `column`.
    ///
    /// While the call is in flight the board shows the card in `column`,
    /// flagged as pending, and further changes to the same order are
    /// rejected. On failure the store is unchanged and the card returns to
    /// its confirmed column on the next view.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`](super::DeskError::NotFound) for an
    /// unknown order, [`DeskError::RecordBusy`](super::DeskError::RecordBusy)
    /// while another change to it is in flight, and
    /// [`DeskError::Remote`](super::DeskError::Remote) when the call fails.
    pub async fn update_kanban_status(
        &self,
        id: &OrderId,
        column: KanbanColumn,
    ) -> DeskResult<TransitionOutcome> {
        self.try_update_kanban_status(id, column)
            .await
            .inspect_err(|err| self.report(err))
    }

    async fn try_update_kanban_status(
        &self,
        id: &OrderId,
        column: KanbanColumn,
    ) -> DeskResult<TransitionOutcome> {
        let current = self.require(id)?;
        let claim = self.busy.claim(id)?;
        let TransitionPlan::Move { from, to } = current.plan_transition(column) else {
            tracing::debug!(order_id = %id, ?column, "card dropped on its own column");
            return Ok(TransitionOutcome::Unchanged);
        };

        claim.show_in(to)?;
        tracing::info!(order_id = %id, %from, ?to, "moving order on board");
        let moved: Order = self
            .client
            .call_decoded(&requests::update_kanban_status(id, to))
            .await?;
        ensure_same_record(id, &moved)?;
        self.commit(moved.clone())?;
        drop(claim);

        self.notify(
            Severity::Success,
            format!(
                "Order {} moved to {}",
                display_name(&moved),
                to.status().label()
            ),
        );
        Ok(TransitionOutcome::Moved(moved))
    }

    /// Returns `true` while a change to order `id` is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`](super::DeskError::Store) when the in-flight
    /// registry is unusable.
    pub fn is_busy(&self, id: &OrderId) -> DeskResult<bool> {
        self.busy.is_busy(id)
    }
}
